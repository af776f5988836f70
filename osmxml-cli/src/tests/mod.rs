//! Shared test harness modules for the osmxml CLI.

use super::*;

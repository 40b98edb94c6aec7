pub mod amount_utils;

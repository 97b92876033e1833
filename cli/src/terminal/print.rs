use colored::*;
use svcprobe_core::MetricValue;

/// Column the bracketed result starts at in `get` output.
const KEY_WIDTH: usize = 46;

pub fn header(msg: &str) {
    println!("{}", format!("⟦ {} METRICS ⟧", msg.to_uppercase()).bright_green());
}

pub fn metric(key: &str, description: &str) {
    println!("  {:<24}{}", key.bold(), description);
}

pub fn value(value: MetricValue) {
    println!("{value}");
}

pub fn keyed_value(key: &str, value: MetricValue) {
    println!("{key:<KEY_WIDTH$}[t|{}]", value.to_string().green());
}

pub fn keyed_unsupported(key: &str, message: &str) {
    println!("{key:<KEY_WIDTH$}[m|{}]", message.red());
}

use chrono::{SecondsFormat, Utc};

fn main() {
    // stamped into the footer as "Last built <month> <year>"
    let build_time = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    println!("cargo:rustc-env=BUILD_TIME={build_time}");

    // restamp whenever site content changes
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=data");
}

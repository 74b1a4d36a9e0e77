//! This build script embeds the current UTC time so a watch without a
//! real-time clock starts from the moment it was built.

use std::{env, fs::File, io::Write, path::PathBuf};

fn main() {
    let out = &PathBuf::from(env::var_os("OUT_DIR").unwrap());

    // create rs file with current UTC time
    File::create(out.join("utc.rs"))
        .unwrap()
        .write_fmt(format_args!(
            "const BUILD_UTC_EPOCH: i64 = {:?};",
            chrono::Utc::now().timestamp()
        ))
        .unwrap();

    // Only re-run when the build script itself changes.
    println!("cargo:rerun-if-changed=build.rs");
}

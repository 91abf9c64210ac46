use std::process::Command;

fn main() {
    let version = std::env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "0.0.0".to_string());

    // CI sets the build number; local builds report 0
    let build_number = std::env::var("CLASSICRYPT_BUILD_NUMBER")
        .ok()
        .and_then(|n| n.trim().parse::<u64>().ok())
        .unwrap_or(0);

    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "debug".to_string());
    let profile = if profile == "release" { "release" } else { "development" };

    let git_hash = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=CLASSICRYPT_VERSION={}", version);
    println!("cargo:rustc-env=CLASSICRYPT_BUILD={}", build_number);
    println!("cargo:rustc-env=CLASSICRYPT_PROFILE={}", profile);
    println!("cargo:rustc-env=CLASSICRYPT_GIT_HASH={}", git_hash);

    println!("cargo:rerun-if-env-changed=CLASSICRYPT_BUILD_NUMBER");
    println!("cargo:rerun-if-env-changed=PROFILE");
}

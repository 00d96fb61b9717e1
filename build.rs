use std::process::Command;

// Stamp the binary with git metadata for the --version string. Both vars are
// optional; the CLI falls back to the bare package version outside a checkout.
fn main() {
    let hash = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string());
    if let Some(hash) = hash {
        println!("cargo:rustc-env=GIT_HASH={hash}");
        let dirty = Command::new("git")
            .args(["diff", "--quiet"])
            .status()
            .map(|s| if s.success() { "clean" } else { "dirty" })
            .unwrap_or("unknown");
        println!("cargo:rustc-env=GIT_DIRTY={dirty}");
    }
}

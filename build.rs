use std::env;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Host builds only compile the control logic and its tests
    let target = env::var("TARGET").unwrap_or_default();
    if target.contains("avr") {
        println!("cargo:rustc-link-arg=-mmcu=attiny2313");
        println!("cargo:warning=Building for ATtiny2313 at 8MHz");
    }
}

//! Build script compiling the C variants found under `src/`.

use std::env;

fn main() {
    println!("cargo:rustc-check-cfg=cfg(c_implementation_active)");

    let build = cc::Build::new();
    let compiler = match build.try_get_compiler() {
        Ok(compiler) => compiler,
        Err(_) => {
            println!("cargo:warning=No C compiler found. C variants disabled.");
            return;
        }
    };

    let compiler_name = if compiler.is_like_clang() {
        // Vanilla clang shares Rust's LLVM backend, so it is only accepted as Apple Clang.
        if env::var("CARGO_CFG_TARGET_OS").unwrap_or_default() == "macos" {
            "Apple Clang"
        } else {
            println!("cargo:warning=Vanilla Clang detected. C variants disabled (requires GCC, MSVC, or Apple Clang).");
            return;
        }
    } else if compiler.is_like_gnu() {
        "GCC"
    } else if compiler.is_like_msvc() {
        "MSVC"
    } else {
        println!("cargo:warning=C compiler is not compatible (needs GCC, MSVC, or Apple Clang). C variants disabled.");
        return;
    };

    let c_files: Vec<_> = match glob::glob("src/**/*.c") {
        Ok(paths) => paths.filter_map(|entry| entry.ok()).collect(),
        Err(e) => {
            println!("cargo:warning=Invalid glob pattern for C sources: {}", e);
            return;
        }
    };
    if c_files.is_empty() {
        return;
    }

    let mut build = cc::Build::new();
    for file in &c_files {
        println!("cargo:rerun-if-changed={}", file.display());
        build.file(file);
    }

    let rustflags = env::var("RUSTFLAGS").unwrap_or_default();
    let encoded_rustflags = env::var("CARGO_ENCODED_RUSTFLAGS").unwrap_or_default();
    if rustflags.contains("target-cpu=native") || encoded_rustflags.contains("target-cpu=native") {
        build.flag_if_supported("-march=native");
    }

    build.opt_level(3).compile("practice_algo_c");

    println!("cargo:rustc-cfg=c_implementation_active");
    println!("cargo:rustc-env=C_COMPILER_NAME={}", compiler_name);
}

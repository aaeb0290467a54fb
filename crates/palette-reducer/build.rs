use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// IEC 61966-2-1 exact formula: sRGB to linear
fn srgb_to_linear_exact(srgb: f64) -> f64 {
    if srgb > 0.04045 {
        ((srgb + 0.055) / 1.055).powf(2.4)
    } else {
        srgb / 12.92
    }
}

/// Pure power curve without the linear toe.
fn srgb_to_linear_rough(srgb: f64) -> f64 {
    ((srgb + 0.055) / 1.055).powf(2.4)
}

fn write_table(file: &mut File, doc: &str, name: &str, values: &[f64]) {
    writeln!(file, "/// {doc}").unwrap();
    writeln!(file, "pub static {name}: [f64; {}] = [", values.len()).unwrap();
    for (i, v) in values.iter().enumerate() {
        if i > 0 && i % 4 == 0 {
            writeln!(file).unwrap();
        }
        // `{:?}` prints the shortest representation that round-trips exactly
        write!(file, "    {v:?},").unwrap();
    }
    writeln!(file, "\n];\n").unwrap();
}

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("color_tables.rs");
    let mut file = File::create(&dest_path).unwrap();

    let exact: Vec<f64> = (0..256)
        .map(|i| srgb_to_linear_exact(i as f64 / 255.0))
        .collect();
    write_table(
        &mut file,
        "Linear light for each 8-bit sRGB value (piecewise curve)",
        "SRGB_TO_LINEAR",
        &exact,
    );

    let rough: Vec<f64> = (0..256)
        .map(|i| srgb_to_linear_rough(i as f64 / 255.0))
        .collect();
    write_table(
        &mut file,
        "Linear light for each 8-bit sRGB value (power curve only)",
        "SRGB_TO_LINEAR_ROUGH",
        &rough,
    );

    // Index is 3r + 4g + b, so 2041 entries cover every 8-bit input
    let luma: Vec<f64> = (0..2041)
        .map(|i| {
            if i == 0 {
                0.0
            } else {
                (i as f64 / 2041.0).cbrt() * 1163.73
            }
        })
        .collect();
    write_table(
        &mut file,
        "YCwCm cube-root luma, indexed by 3r + 4g + b",
        "YCWCM_LUMA",
        &luma,
    );

    let mut chroma = vec![0.0f64; 511];
    for i in 1..256 {
        let v = (i as f64 / 257.0).powf(0.625) * 179.293;
        chroma[255 + i] = v;
        chroma[255 - i] = -v;
    }
    write_table(
        &mut file,
        "YCwCm chroma axis, indexed by 255 + (difference of two channels)",
        "YCWCM_CHROMA",
        &chroma,
    );

    println!("cargo::rerun-if-changed=build.rs");
}

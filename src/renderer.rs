use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;
use log::{error, warn, info};

// @module: External pdflatex invocation

/// Compile a LaTeX document to PDF with pdflatex.
///
/// Runs the compiler twice so references and the table of contents built
/// during the first pass resolve in the second. Never propagates an error
/// past this boundary: every failure mode is logged and reported as `false`,
/// and the caller decides how to degrade.
pub fn compile_pdf(tex_file: &Path) -> bool {
    info!("Compiling {:?} to PDF...", tex_file);

    let working_dir = match tex_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = tex_file.file_name().unwrap_or(tex_file.as_os_str());

    // Two passes: the second resolves the table of contents
    for pass in 1..=2 {
        let output = Command::new("pdflatex")
            .arg("-interaction=nonstopmode")
            .arg(file_name)
            .current_dir(working_dir)
            .output();

        match output {
            Ok(output) => {
                if !output.status.success() {
                    error!("Error during pdflatex compilation (run {})", pass);
                    error!("{}", String::from_utf8_lossy(&output.stdout));
                    error!("{}", String::from_utf8_lossy(&output.stderr));
                    return false;
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                error!(
                    "pdflatex not found. Please ensure LaTeX is installed and pdflatex is in your PATH."
                );
                return false;
            }
            Err(e) => {
                error!("Error during compilation: {}", e);
                return false;
            }
        }
    }

    // Exit status alone is not enough, the artifact has to be there
    let pdf_file = tex_file.with_extension("pdf");
    if pdf_file.exists() {
        info!("PDF successfully generated: {:?}", pdf_file);
        true
    } else {
        warn!("PDF file was not created despite successful compilation");
        false
    }
}

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use otter_red::{builder::dimacs::DimacsInfo, context::Context, types::err::ErrorKind};

pub enum ReadError {
    Open,
    Unsupported,
    Formula(ErrorKind),
}

/// Reads the formula at `path` into `context`, or from standard input if there is no path.
pub fn read_formula(context: &mut Context, path: Option<&Path>) -> Result<DimacsInfo, ReadError> {
    let Some(path) = path else {
        println!("c Reading from standard input... Use '--help' for help.");
        let stdin = std::io::stdin();
        return read_from(context, stdin.lock());
    };

    let file = File::open(path).map_err(|_| ReadError::Open)?;

    match path.extension() {
        Some(extension) if extension == "xz" => read_xz(context, file),
        _ => read_from(context, BufReader::new(file)),
    }
}

fn read_from(context: &mut Context, reader: impl BufRead) -> Result<DimacsInfo, ReadError> {
    context.read_dimacs(reader).map_err(ReadError::Formula)
}

#[cfg(feature = "xz")]
fn read_xz(context: &mut Context, file: File) -> Result<DimacsInfo, ReadError> {
    read_from(context, BufReader::new(xz2::read::XzDecoder::new(file)))
}

#[cfg(not(feature = "xz"))]
fn read_xz(_context: &mut Context, _file: File) -> Result<DimacsInfo, ReadError> {
    Err(ReadError::Unsupported)
}

//! Stdin pipe mode: `echo '**a**' | fizzy-md` converts the stream and exits
//! without ever running fizzy.

#[cfg(unix)]
use std::fs::File;
use std::io::{self, Read, Write};
#[cfg(not(unix))]
use std::io::IsTerminal;

use log::debug;

use crate::converter::Converter;
use crate::error::{Error, Result};

/// Abstraction over stdin so tests can simulate piped or interactive input.
pub trait StdinReader {
    /// Returns `true` if stdin carries data to convert: a pipe or a
    /// redirected regular file. Terminals, other character devices such as
    /// `/dev/null`, and a closed stdin all count as not piped.
    fn is_piped(&self) -> bool;

    /// Reads stdin to completion. Only called when stdin is piped.
    fn read_all(&self) -> io::Result<Vec<u8>>;
}

/// The process's real stdin.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealStdin;

impl StdinReader for RealStdin {
    #[cfg(unix)]
    fn is_piped(&self) -> bool {
        use std::os::fd::AsFd;

        // Duplicating fd 0 fails when stdin is closed.
        let Ok(fd) = io::stdin().as_fd().try_clone_to_owned() else {
            return false;
        };
        carries_data(&File::from(fd))
    }

    #[cfg(not(unix))]
    fn is_piped(&self) -> bool {
        !io::stdin().is_terminal()
    }

    fn read_all(&self) -> io::Result<Vec<u8>> {
        let mut buffer = Vec::new();
        io::stdin().lock().read_to_end(&mut buffer)?;
        Ok(buffer)
    }
}

/// Pipes and regular files carry data; ttys and `/dev/null` do not.
#[cfg(unix)]
fn carries_data(file: &File) -> bool {
    use std::os::unix::fs::FileTypeExt;

    file.metadata()
        .is_ok_and(|meta| !meta.file_type().is_char_device())
}

/// What the pipe adapter did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipeOutcome {
    /// Stdin was piped; its HTML has been written to the output.
    Converted,
    /// Stdin is not piped; nothing was read and the caller should carry on.
    NotPiped,
}

/// Converts piped stdin to HTML on `out`, with no trailing newline added.
///
/// A reader that has gone away (`BrokenPipe`) is not treated as a failure.
pub fn pipe<R, W>(stdin: &R, out: &mut W, converter: &Converter) -> Result<PipeOutcome>
where
    R: StdinReader + ?Sized,
    W: Write + ?Sized,
{
    if !stdin.is_piped() {
        return Ok(PipeOutcome::NotPiped);
    }

    let input = stdin.read_all().map_err(Error::Stdin)?;
    debug!("read {} bytes from piped stdin", input.len());

    let html = converter.convert(&String::from_utf8_lossy(&input))?;

    match out.write_all(html.as_bytes()).and_then(|()| out.flush()) {
        Ok(()) => Ok(PipeOutcome::Converted),
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(PipeOutcome::Converted),
        Err(err) => Err(Error::Stdout(err)),
    }
}

#[cfg(test)]
#[path = "pipe_tests.rs"]
mod tests;

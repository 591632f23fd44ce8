use crate::InputFeed;
use rook_runtime::{Borrow, PtrMut, Result, prelude::*};

/// Captures output from Rook in a String
///
/// [RookWrite] is implemented for OutputCapture, allowing it to be used as stdout and stderr
/// for the Rook runtime.
#[derive(Clone)]
pub struct OutputCapture {
    output: PtrMut<String>,
}

impl Default for OutputCapture {
    fn default() -> Self {
        Self {
            output: make_ptr_mut!(String::default()),
        }
    }
}

impl OutputCapture {
    /// Returns a [RookVm] with `stdout` and `stderr` captured by an instance of [OutputCapture]
    pub fn make_vm_with_output_capture() -> (RookVm, Self) {
        let output_capture = Self::default();

        let vm = RookVm::with_settings(RookVmSettings {
            stdout: make_ptr!(output_capture.clone()),
            stderr: make_ptr!(output_capture.clone()),
            ..Default::default()
        });

        (vm, output_capture)
    }

    /// Clears the captured output
    pub fn clear(&mut self) {
        self.output.borrow_mut().clear();
    }

    /// Returns the currently captured output
    pub fn captured_output(&self) -> Borrow<'_, String> {
        self.output.borrow()
    }
}

/// Returns a [RookVm] with scripted stdin, and with stdout and stderr captured separately
///
/// The returned captures are `(stdout, stderr)`.
pub fn make_vm_with_io(input: &str, args: &[&str]) -> (RookVm, OutputCapture, OutputCapture) {
    let stdout = OutputCapture::default();
    let stderr = OutputCapture::default();

    let vm = RookVm::with_settings(RookVmSettings {
        stdin: make_ptr!(InputFeed::new(input)),
        stdout: make_ptr!(stdout.clone()),
        stderr: make_ptr!(stderr.clone()),
        args: args.iter().map(|arg| arg.to_string()).collect(),
        ..Default::default()
    });

    (vm, stdout, stderr)
}

impl RookRead for OutputCapture {}
impl RookWrite for OutputCapture {
    fn write_line(&self, output: &str) -> Result<()> {
        let mut unlocked = self.output.borrow_mut();
        unlocked.push_str(output);
        unlocked.push('\n');
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        Ok(())
    }
}

use rook_memory::Address;

/// Accumulates the display form of a value
///
/// Containers render their contents via [DisplayContext::container], which quotes nested strings
/// and stops at containers that are already being rendered.
#[derive(Default)]
pub struct DisplayContext {
    output: String,
    // The containers currently being rendered, outermost first
    open_containers: Vec<Address>,
}

impl DisplayContext {
    /// Appends text to the output
    pub fn append(&mut self, text: &str) {
        self.output.push_str(text);
    }

    /// Appends a single character to the output
    pub fn push(&mut self, c: char) {
        self.output.push(c);
    }

    /// Returns true while rendering the contents of a container
    pub fn is_contained(&self) -> bool {
        !self.open_containers.is_empty()
    }

    /// Renders the contents of the container with the given address
    ///
    /// If the container is already open further up then `...` is appended instead.
    pub fn container(&mut self, address: Address, render_contents: impl FnOnce(&mut Self)) {
        if self.open_containers.contains(&address) {
            self.append("...");
            return;
        }

        self.open_containers.push(address);
        render_contents(self);
        self.open_containers.pop();
    }

    /// Consumes the context, returning the output
    pub fn result(self) -> String {
        self.output
    }
}

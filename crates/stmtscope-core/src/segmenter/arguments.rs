//! Argument accumulation for sugar calls.

/// Text buffers filled while inside a sugar call: the function name first,
/// then one buffer per positional argument.
#[derive(Debug)]
pub(super) struct ArgumentBuffers {
    buffers: Vec<String>,
}

impl ArgumentBuffers {
    /// Starts with one empty buffer for the function name.
    pub(super) fn new() -> Self {
        Self {
            buffers: vec![String::new()],
        }
    }

    /// Appends to the current (last) buffer.
    pub(super) fn push_str(&mut self, text: &str) {
        match self.buffers.last_mut() {
            Some(current) => current.push_str(text),
            None => self.buffers.push(text.to_string()),
        }
    }

    /// Drops the current buffer's trailing separator and opens the next one.
    pub(super) fn close_current(&mut self, separator: &str) {
        if let Some(current) = self.buffers.last_mut() {
            strip_separator(current, separator);
        }
        self.buffers.push(String::new());
    }

    /// Renders the accumulated call in canonical `name(args)` form.
    ///
    /// `nz` with two or three arguments becomes `IIf(IsNull(a), b, a)`, with
    /// an empty second argument replaced by `''`.
    pub(super) fn into_call(self, separator: &str) -> String {
        let mut parts = self.buffers.into_iter().map(|mut part| {
            strip_separator(&mut part, separator);
            part
        });
        let name = parts.next().unwrap_or_default().to_lowercase();
        let mut args: Vec<String> = parts.collect();

        if name == "nz" && matches!(args.len(), 2 | 3) {
            if args[1].is_empty() {
                args[1].push_str("''");
            }
            return format!("IIf(IsNull({0}), {1}, {0})", args[0], args[1]);
        }

        let joined = args.join(", ");
        format!("{name}({})", joined.trim_end_matches([',', ' ']))
    }
}

fn strip_separator(text: &mut String, separator: &str) {
    if !separator.is_empty() && text.ends_with(separator) {
        text.truncate(text.len() - separator.len());
    }
}

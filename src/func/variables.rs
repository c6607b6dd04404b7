/// Provide names for the variables of a function
pub trait VariableNamer {
    fn format_name(&self, f: &mut dyn std::fmt::Write, uid: usize) -> std::fmt::Result;

    fn name(&self, uid: usize) -> String {
        let mut s = String::new();
        match self.format_name(&mut s, uid) {
            Ok(()) => s,
            Err(_) => format!("x{}", uid),
        }
    }
}

/// Default names: x0, x1, ...
pub struct IndexedNamer;

/// Shared instance of the default namer
pub static INDEXED: IndexedNamer = IndexedNamer;

impl VariableNamer for IndexedNamer {
    fn format_name(&self, f: &mut dyn std::fmt::Write, uid: usize) -> std::fmt::Result {
        write!(f, "x{}", uid)
    }
}

/// Use a list of names, falling back to the default names for missing entries
impl VariableNamer for Vec<String> {
    fn format_name(&self, f: &mut dyn std::fmt::Write, uid: usize) -> std::fmt::Result {
        match self.get(uid) {
            Some(name) => write!(f, "{}", name),
            None => INDEXED.format_name(f, uid),
        }
    }
}

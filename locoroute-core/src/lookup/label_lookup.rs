/// resolves a human-readable label for a depot or station identifier.
pub trait LabelLookup: Send + Sync {
    fn label(&self, id: &str) -> String;
}

// Serde default functions shared by the option structs.

pub(crate) const fn default_true() -> bool {
    true
}

use std::path::Path;

/// Typed, non-owning handle to the caller variable an option writes into.
///
/// The variant doubles as the option's kind, so a declaration can never pair
/// a kind with the wrong storage type. `'a` is the borrow of the caller's
/// variable, `'s` the lifetime of the argument text that string and path
/// bindings point into.
pub enum Bind<'a, 's> {
    /// Set to `true` when the option occurs.
    Flag(&'a mut bool),
    /// Incremented once per occurrence; the only kind that may repeat.
    Count(&'a mut u32),
    Int(&'a mut i64),
    Float(&'a mut f64),
    Str(&'a mut &'s str),
    Path(&'a mut &'s Path),
    /// Like `Path`, but checked by [`crate::Parser::validate_path_options`].
    PathExisting(&'a mut &'s Path),
}

impl Bind<'_, '_> {
    /// Label shown in usage output, `None` for parameter-free kinds.
    pub(crate) fn param_label(&self) -> Option<&'static str> {
        match self {
            Bind::Flag(_) | Bind::Count(_) => None,
            Bind::Int(_) => Some("integer"),
            Bind::Float(_) => Some("float"),
            Bind::Str(_) => Some("string"),
            Bind::Path(_) | Bind::PathExisting(_) => Some("path"),
        }
    }

    pub(crate) fn requires_param(&self) -> bool {
        self.param_label().is_some()
    }
}

/// One declared option. Construct with the per-kind functions below; short
/// and long names must be unique within one parser (the caller's
/// responsibility, not checked).
pub struct Opt<'a, 's> {
    pub(crate) short: char,
    pub(crate) long: String,
    pub(crate) description: String,
    pub(crate) required: bool,
    pub(crate) is_set: bool,
    pub(crate) bind: Bind<'a, 's>,
}

impl<'a, 's> Opt<'a, 's> {
    pub fn flag(short: char, long: &str, description: &str, value: &'a mut bool) -> Self {
        Opt::new(short, long, description, false, Bind::Flag(value))
    }

    /// A flag whose occurrences are counted, e.g. `-vvv` for verbosity.
    pub fn flag_count(short: char, long: &str, description: &str, value: &'a mut u32) -> Self {
        Opt::new(short, long, description, false, Bind::Count(value))
    }

    pub fn int(
        short: char,
        long: &str,
        description: &str,
        required: bool,
        value: &'a mut i64,
    ) -> Self {
        Opt::new(short, long, description, required, Bind::Int(value))
    }

    pub fn float(
        short: char,
        long: &str,
        description: &str,
        required: bool,
        value: &'a mut f64,
    ) -> Self {
        Opt::new(short, long, description, required, Bind::Float(value))
    }

    pub fn string(
        short: char,
        long: &str,
        description: &str,
        required: bool,
        value: &'a mut &'s str,
    ) -> Self {
        Opt::new(short, long, description, required, Bind::Str(value))
    }

    pub fn path(
        short: char,
        long: &str,
        description: &str,
        required: bool,
        value: &'a mut &'s Path,
    ) -> Self {
        Opt::new(short, long, description, required, Bind::Path(value))
    }

    /// A path that must name a readable file at validation time.
    pub fn path_existing(
        short: char,
        long: &str,
        description: &str,
        required: bool,
        value: &'a mut &'s Path,
    ) -> Self {
        Opt::new(short, long, description, required, Bind::PathExisting(value))
    }

    fn new(short: char, long: &str, description: &str, required: bool, bind: Bind<'a, 's>) -> Self {
        Opt {
            short,
            long: long.to_string(),
            description: description.to_string(),
            required,
            is_set: false,
            bind,
        }
    }
}

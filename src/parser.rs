use std::{fmt::Write as _, fs, path::Path};

use crate::opt::{Bind, Opt};
use crate::{Error, Result};

macro_rules! w {
    ($($tt:tt)*) => {
        drop(write!($($tt)*))
    };
}

/// Walks an argument vector once, writing option values through the bindings
/// declared in its [`Opt`] list and collecting positional arguments.
pub struct Parser<'a, 's> {
    opts: Vec<Opt<'a, 's>>,
    remaining: Vec<&'s str>,
    exe_name: Option<&'s str>,
}

impl<'a, 's> Parser<'a, 's> {
    pub fn new(opts: Vec<Opt<'a, 's>>) -> Self {
        Parser { opts, remaining: Vec::new(), exe_name: None }
    }

    /// Parses the full process argument vector, program name at index 0.
    ///
    /// On error the bindings, set-flags and remaining-arguments list are left
    /// in whatever partial state the scan reached; a failed parse is expected
    /// to abort startup, not to be resumed.
    pub fn parse(&mut self, args: &[&'s str]) -> Result<()> {
        self.exe_name = args.first().copied();
        let mut rest = args.get(1..).unwrap_or(&[]);
        while let Some(&token) = rest.first() {
            let consumed = self.handle_token(token, rest)?;
            rest = &rest[1 + consumed..];
        }
        for opt in &self.opts {
            if opt.required && !opt.is_set {
                return Err(Error::MissingRequiredOption {
                    short: opt.short,
                    long: opt.long.clone(),
                });
            }
        }
        Ok(())
    }

    /// Positional arguments, in the order encountered.
    pub fn remaining_args(&self) -> &[&'s str] {
        &self.remaining
    }

    /// `args[0]` of the last `parse` call.
    pub fn executable_name(&self) -> Option<&'s str> {
        self.exe_name
    }

    /// Checks that every `PathExisting` binding names a file that can be
    /// opened for reading. All failures are collected, not just the first.
    /// Bindings an optional option never touched are checked too, so caller
    /// defaults must also name readable files.
    pub fn validate_path_options(&self) -> Result<(), Vec<Error>> {
        let mut errors = Vec::new();
        for opt in &self.opts {
            if let Bind::PathExisting(path) = &opt.bind {
                if fs::File::open(path).is_err() {
                    errors.push(Error::PathNotReadable {
                        short: opt.short,
                        long: opt.long.clone(),
                        path: path.display().to_string(),
                    });
                }
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Renders the option list, one line per option in declaration order:
    ///
    /// ```text
    /// Options:
    ///   -i, --input-file <string>\tinput file (required)
    ///   -v, --verbose\tverbose logging
    /// ```
    pub fn options_usage(&self) -> String {
        let mut buf = String::from("Options:\n");
        for opt in &self.opts {
            w!(buf, "  -{}, --{}", opt.short, opt.long);
            if let Some(label) = opt.bind.param_label() {
                w!(buf, " <{}>", label);
            }
            w!(buf, "\t{}", opt.description);
            if opt.required {
                buf.push_str(" (required)");
            }
            buf.push('\n');
        }
        buf
    }

    /// Prints [`Parser::options_usage`] to stderr.
    pub fn print_options_usage(&self) {
        eprint!("{}", self.options_usage());
    }

    /// Classifies one token; returns how many extra tokens it consumed.
    fn handle_token(&mut self, token: &'s str, rest: &[&'s str]) -> Result<usize> {
        if let Some(long) = token.strip_prefix("--") {
            let idx = self
                .opts
                .iter()
                .position(|opt| opt.long == long)
                .ok_or_else(|| Error::UnknownLongOption { long: long.to_string() })?;
            return self.apply(idx, rest);
        }
        if token.len() > 1 && token.starts_with('-') {
            return self.handle_cluster(&token[1..], rest);
        }
        // Plain argument; a lone `-` lands here too.
        self.remaining.push(token);
        Ok(0)
    }

    fn handle_cluster(&mut self, cluster: &str, rest: &[&'s str]) -> Result<usize> {
        let last = cluster.chars().count() - 1;
        let mut consumed = 0;
        for (pos, ch) in cluster.chars().enumerate() {
            let idx = self
                .opts
                .iter()
                .position(|opt| opt.short == ch)
                .ok_or(Error::UnknownShortOption { short: ch })?;
            // Only the final position may claim the next token as its value.
            if self.opts[idx].bind.requires_param() && pos != last {
                return Err(Error::MidClusterParameter { short: ch });
            }
            consumed = self.apply(idx, rest)?;
        }
        Ok(consumed)
    }

    fn apply(&mut self, idx: usize, rest: &[&'s str]) -> Result<usize> {
        let Opt { short, long, is_set, bind, .. } = &mut self.opts[idx];
        if *is_set && !matches!(bind, Bind::Count(_)) {
            return Err(Error::DuplicateOption { short: *short, long: long.clone() });
        }
        *is_set = true;
        match bind {
            Bind::Flag(value) => {
                **value = true;
                Ok(0)
            }
            Bind::Count(value) => {
                **value += 1;
                Ok(0)
            }
            Bind::Int(value) => {
                **value = parse_int(next_param(rest, *short, long)?, *short, long)?;
                Ok(1)
            }
            Bind::Float(value) => {
                **value = parse_float(next_param(rest, *short, long)?, *short, long)?;
                Ok(1)
            }
            Bind::Str(value) => {
                **value = next_param(rest, *short, long)?;
                Ok(1)
            }
            Bind::Path(value) | Bind::PathExisting(value) => {
                **value = Path::new(next_param(rest, *short, long)?);
                Ok(1)
            }
        }
    }
}

fn next_param<'s>(rest: &[&'s str], short: char, long: &str) -> Result<&'s str> {
    rest.get(1)
        .copied()
        .ok_or_else(|| Error::MissingParameter { short, long: long.to_string() })
}

fn parse_int(literal: &str, short: char, long: &str) -> Result<i64> {
    // Digits that pass the grammar can still overflow i64; reported the same.
    if !int_literal(literal) {
        return Err(invalid_int(literal, short, long));
    }
    literal.parse().map_err(|_| invalid_int(literal, short, long))
}

fn parse_float(literal: &str, short: char, long: &str) -> Result<f64> {
    if !float_literal(literal) {
        return Err(invalid_float(literal, short, long));
    }
    literal.parse().map_err(|_| invalid_float(literal, short, long))
}

fn invalid_int(literal: &str, short: char, long: &str) -> Error {
    Error::InvalidIntValue { short, long: long.to_string(), value: literal.to_string() }
}

fn invalid_float(literal: &str, short: char, long: &str) -> Error {
    Error::InvalidFloatValue { short, long: long.to_string(), value: literal.to_string() }
}

/// One or more ASCII digits, optionally preceded by a single sign.
fn int_literal(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Signed mantissa with at most one `.` and at least one digit, then an
/// optional exponent which must itself be a complete integer literal. A bare
/// trailing marker (`5e`) is numerically incomplete and rejected.
fn float_literal(s: &str) -> bool {
    let (mantissa, exponent) = match s.find(['e', 'E']) {
        Some(marker) => (&s[..marker], Some(&s[marker + 1..])),
        None => (s, None),
    };
    let digits = mantissa.strip_prefix(['+', '-']).unwrap_or(mantissa);
    let mut seen_digit = false;
    let mut seen_dot = false;
    for b in digits.bytes() {
        match b {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => return false,
        }
    }
    seen_digit && exponent.map_or(true, int_literal)
}

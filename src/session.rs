use std::fmt::Display;
use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use baltree_core::{Comparator, Tree};
use baltree_render::TreePrinter;
use log::debug;

/// A tree value that can be read from a command-line or script token.
pub trait ScriptValue: Display + Sized {
    fn parse_token(token: &str) -> Result<Self>;
}

impl ScriptValue for f64 {
    fn parse_token(token: &str) -> Result<Self> {
        let value: f64 = token
            .parse()
            .with_context(|| format!("not a number: {}", token))?;
        if value.is_nan() {
            bail!("NaN has no place in an ordered tree");
        }
        Ok(value)
    }
}

impl ScriptValue for String {
    fn parse_token(token: &str) -> Result<Self> {
        Ok(token.to_string())
    }
}

/// A tree plus the settings used to drive it from text commands.
pub struct Session<T, C> {
    tree: Tree<T, C>,
    printer: TreePrinter,
    validate_after_each: bool,
}

impl<T: ScriptValue, C: Comparator<T>> Session<T, C> {
    pub fn new(tree: Tree<T, C>, printer: TreePrinter) -> Self {
        Self {
            tree,
            printer,
            validate_after_each: false,
        }
    }

    /// Check every red-black invariant after each insert and delete.
    pub fn validate_after_each(mut self, enabled: bool) -> Self {
        self.validate_after_each = enabled;
        self
    }

    pub fn tree(&self) -> &Tree<T, C> {
        &self.tree
    }

    pub fn insert_all<S: AsRef<str>>(&mut self, tokens: &[S]) -> Result<()> {
        for token in tokens {
            let value = T::parse_token(token.as_ref())?;
            self.tree.insert(value);
            self.check_if_enabled()?;
        }
        Ok(())
    }

    /// Values in tree order, space separated.
    pub fn listing(&self) -> String {
        join(self.tree.iter())
    }

    pub fn render(&self) -> String {
        self.printer.print(&self.tree)
    }

    /// Execute one script line per input line, writing each reply on its own line.
    pub fn run_script<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        for (index, line) in input.lines().enumerate() {
            let line = line?;
            let reply = self
                .execute(&line)
                .with_context(|| format!("line {}: {}", index + 1, line.trim()))?;
            if let Some(reply) = reply {
                writeln!(out, "{}", reply)?;
            }
        }
        Ok(())
    }

    /// Execute a single operation. Blank lines and `#` comments yield nothing.
    pub fn execute(&mut self, line: &str) -> Result<Option<String>> {
        let mut words = line.split_whitespace();
        let Some(op) = words.next() else {
            return Ok(None);
        };
        if op.starts_with('#') {
            return Ok(None);
        }

        let args: Vec<&str> = words.collect();
        debug!("executing {} {:?}", op, args);

        match op {
            "insert" | "delete" | "clear" => self.mutate(op, &args),
            "print" | "debug" | "check" => self.inspect(op, &args).map(Some),
            _ => self.query(op, &args).map(Some),
        }
    }

    fn mutate(&mut self, op: &str, args: &[&str]) -> Result<Option<String>> {
        if op == "clear" {
            no_args(op, args)?;
            self.tree.clear();
            return Ok(None);
        }
        if args.is_empty() {
            bail!("usage: {} <value>...", op);
        }

        if op == "insert" {
            self.insert_all(args)?;
            return Ok(None);
        }

        let mut removed = Vec::with_capacity(args.len());
        for token in args {
            let value = T::parse_token(token)?;
            removed.push(self.tree.delete(&value).to_string());
            self.check_if_enabled()?;
        }
        Ok(Some(removed.join(" ")))
    }

    fn inspect(&self, op: &str, args: &[&str]) -> Result<String> {
        no_args(op, args)?;
        let text = match op {
            "print" => self.render(),
            "debug" => self.printer.debug_print(&self.tree),
            _ => {
                let height = self.tree.validate()?;
                return Ok(format!("ok, black height {}", height));
            }
        };
        Ok(text.trim_end_matches('\n').to_string())
    }

    fn query(&self, op: &str, args: &[&str]) -> Result<String> {
        let reply = match op {
            "find" => {
                let value = T::parse_token(single(op, args)?)?;
                self.tree.contains(&value).to_string()
            }
            "first" => no_args(op, args).map(|_| show(self.tree.first()))?,
            "last" => no_args(op, args).map(|_| show(self.tree.last()))?,
            "under" | "above" => {
                let (token, included) = bound_args(op, args)?;
                let bound = T::parse_token(token)?;
                if op == "under" {
                    show(self.tree.biggest_under(&bound, included))
                } else {
                    show(self.tree.smallest_above(&bound, included))
                }
            }
            "closest" => {
                let value = T::parse_token(single(op, args)?)?;
                let (below, above) = self.tree.closest(&value);
                format!("{} {}", show(below), show(above))
            }
            "between" => self.between(args)?,
            "list" => no_args(op, args).map(|_| self.listing())?,
            "size" => no_args(op, args).map(|_| self.tree.len().to_string())?,
            "depth" => no_args(op, args).map(|_| self.tree.depth().to_string())?,
            other => bail!("unknown operation: {}", other),
        };
        Ok(reply)
    }

    fn between(&self, args: &[&str]) -> Result<String> {
        let (lower, upper, included) = match args {
            [lower, upper] => (*lower, *upper, true),
            [lower, upper, "excl"] => (*lower, *upper, false),
            _ => bail!("usage: between <lower> <upper> [excl]"),
        };
        let lower = T::parse_token(lower)?;
        let upper = T::parse_token(upper)?;
        Ok(join(self.tree.between(&lower, &upper, included)))
    }

    fn check_if_enabled(&self) -> Result<()> {
        if self.validate_after_each {
            self.tree.validate()?;
        }
        Ok(())
    }
}

fn no_args(op: &str, args: &[&str]) -> Result<()> {
    if !args.is_empty() {
        bail!("{} takes no arguments", op);
    }
    Ok(())
}

fn single<'a>(op: &str, args: &[&'a str]) -> Result<&'a str> {
    match args {
        [value] => Ok(*value),
        _ => bail!("usage: {} <value>", op),
    }
}

fn bound_args<'a>(op: &str, args: &[&'a str]) -> Result<(&'a str, bool)> {
    match args {
        [value] => Ok((*value, false)),
        [value, "incl"] => Ok((*value, true)),
        _ => bail!("usage: {} <value> [incl]", op),
    }
}

fn show<V: Display>(value: Option<V>) -> String {
    value.map_or_else(|| "none".to_string(), |v| v.to_string())
}

fn join<V: Display>(values: impl Iterator<Item = V>) -> String {
    values.map(|v| v.to_string()).collect::<Vec<_>>().join(" ")
}

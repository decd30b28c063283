/// The runtime variable store.
///
/// `Environment` maps variable names to their current numeric values. It is a
/// single flat scope: blocks introduced by `if`/`while` bodies do not create
/// nested scopes, so a variable assigned inside a loop body remains visible
/// after the loop.
///
/// Entries are kept in insertion order in a plain vector and looked up by
/// linear scan. The programs this interpreter runs are small and short-lived,
/// so the O(n) operations are not a concern, and the flat representation
/// makes the one-entry-per-name invariant easy to uphold: `set` either
/// updates the existing entry in place or appends a new one, never both.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Environment {
    entries: Vec<(String, f64)>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Assigns a value to a variable.
    ///
    /// If an entry with the given name already exists it is updated in
    /// place; otherwise a new entry is appended. There is never more than
    /// one entry per name.
    ///
    /// # Parameters
    /// - `name`: Variable name.
    /// - `value`: Value to store.
    ///
    /// # Example
    /// ```
    /// use numscript::interpreter::environment::Environment;
    ///
    /// let mut env = Environment::new();
    ///
    /// env.set("x", 1.0);
    /// env.set("x", 2.0);
    ///
    /// assert_eq!(env.get("x"), Some(2.0));
    /// assert_eq!(env.len(), 1);
    /// ```
    pub fn set(&mut self, name: &str, value: f64) {
        for entry in &mut self.entries {
            if entry.0 == name {
                entry.1 = value;
                return;
            }
        }
        self.entries.push((name.to_string(), value));
    }

    /// Looks up a variable by name.
    ///
    /// # Parameters
    /// - `name`: Variable name.
    ///
    /// # Returns
    /// The current value if the variable is defined, otherwise `None`. The
    /// evaluator maps `None` to an unknown-variable error; there is no
    /// silent default value.
    ///
    /// # Example
    /// ```
    /// use numscript::interpreter::environment::Environment;
    ///
    /// let mut env = Environment::new();
    /// env.set("x", 5.0);
    ///
    /// assert_eq!(env.get("x"), Some(5.0));
    /// assert_eq!(env.get("y"), None);
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(entry_name, _)| entry_name == name)
            .map(|(_, value)| *value)
    }

    /// Returns the number of defined variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no variables are defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

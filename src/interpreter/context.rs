use std::{collections::HashMap, f64::consts::PI};

use crate::error::EvaluationError;

/// The unit angles are measured in by the trigonometric functions.
///
/// `sin`, `cos`, `tan`, `csc` and `cot` read their argument in this unit;
/// `arcsin`, `arccos` and `arctan` return their result in it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum AngleMode {
    /// Radians; a full turn is `2 * pi`.
    #[default]
    #[value(name = "rad")]
    Radians,
    /// Degrees; a full turn is 360.
    #[value(name = "deg")]
    Degrees,
    /// Gradians; a full turn is 400.
    #[value(name = "grad")]
    Gradians,
}

impl AngleMode {
    /// Converts an angle in this unit to radians.
    ///
    /// # Example
    /// ```
    /// use varcalc::interpreter::context::AngleMode;
    ///
    /// assert_eq!(AngleMode::Radians.to_radians(1.5), 1.5);
    /// assert_eq!(AngleMode::Gradians.to_radians(100.0), std::f64::consts::FRAC_PI_2);
    /// ```
    #[must_use]
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            Self::Radians => angle,
            Self::Degrees => angle.to_radians(),
            Self::Gradians => angle / 200.0 * PI,
        }
    }

    /// Converts an angle in radians to this unit.
    #[must_use]
    pub fn unit_from_radians(self, angle: f64) -> f64 {
        match self {
            Self::Radians => angle,
            Self::Degrees => angle.to_degrees(),
            Self::Gradians => angle / PI * 200.0,
        }
    }
}

/// Values for the free variables of one evaluation, and the angle unit the
/// trigonometric functions use.
///
/// A context is filled before evaluation and only read while a tree is
/// evaluated; evaluation takes it by shared reference. Contexts are not
/// carried from one evaluation to the next.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableContext {
    values:     HashMap<String, f64>,
    angle_mode: AngleMode,
}

impl VariableContext {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pairs each name with the value at the same position.
    ///
    /// When a name appears more than once, the last value given for it wins.
    ///
    /// # Errors
    /// Returns [`EvaluationError::ValueCountMismatch`] when the lists differ in
    /// length.
    ///
    /// # Example
    /// ```
    /// use varcalc::interpreter::context::VariableContext;
    ///
    /// let names = vec!["x".to_string(), "y".to_string()];
    /// let ctx = VariableContext::bind(&names, &[1.0, 2.0]).unwrap();
    /// assert_eq!(ctx.get("y"), Some(2.0));
    ///
    /// assert!(VariableContext::bind(&names, &[1.0]).is_err());
    /// ```
    pub fn bind<S: AsRef<str>>(names: &[S], values: &[f64]) -> Result<Self, EvaluationError> {
        if names.len() != values.len() {
            return Err(EvaluationError::ValueCountMismatch { expected: names.len(),
                                                             found:    values.len(), });
        }
        Ok(names.iter().map(AsRef::as_ref).zip(values.iter().copied()).collect())
    }

    /// Returns this context with trigonometry measured in `mode`.
    ///
    /// # Example
    /// ```
    /// use varcalc::interpreter::context::{AngleMode, VariableContext};
    ///
    /// let ctx = VariableContext::new().with_angle_mode(AngleMode::Degrees);
    /// assert_eq!(ctx.angle_mode(), AngleMode::Degrees);
    /// ```
    #[must_use]
    pub fn with_angle_mode(mut self, mode: AngleMode) -> Self {
        self.angle_mode = mode;
        self
    }

    /// The unit trigonometric functions measure angles in.
    #[must_use]
    pub const fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    /// Sets the value of `name`, returning the value it replaces.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        self.values.insert(name.into(), value)
    }

    /// The value bound to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Whether `name` has a value.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of bound names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no name is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for VariableContext {
    fn from_iter<T: IntoIterator<Item = (S, f64)>>(iter: T) -> Self {
        Self { values:     iter.into_iter().map(|(name, value)| (name.into(), value)).collect(),
               angle_mode: AngleMode::default(), }
    }
}

use crate::geometry::Float;

/// Presentation hint for a [`Parameter`].
///
/// Hints are inert: nothing in this crate reads them. They exist so an
/// external property editor can pick a suitable widget, e.g. a dial
/// for a value tagged [`ParameterHint::Angle`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ParameterHint {
    Generic,
    /// The value is an angle, in radians.
    Angle,
}

/// A named, adjustable scalar exposed to host tooling.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter<T> {
    pub name: Option<T>,
    pub value: Float,
    pub range: (Float, Float),
    pub hint: ParameterHint,
}

impl<T> Parameter<T> {
    pub fn named(name: T, value: Float) -> Self {
        Self {
            name: Some(name),
            value,
            range: (value, value),
            hint: ParameterHint::Generic,
        }
    }

    pub fn unnamed(value: Float) -> Self {
        Self {
            name: None,
            value,
            range: (value, value),
            hint: ParameterHint::Generic,
        }
    }

    pub fn with_hint(mut self, hint: ParameterHint) -> Self {
        self.hint = hint;
        self
    }
}

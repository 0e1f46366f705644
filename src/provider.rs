//! Named-function registry a host evaluator installs once at startup.
//!
//! The host hands already type-checked arguments over as [`Value`]s and gets a
//! [`Value`] back. Warnings go to the sink passed with each call.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::adjust;
use crate::amount::Amount;
use crate::color::RgbColor;
use crate::config::ProviderConfig;
use crate::diagnostics::DiagnosticsSink;
use crate::error::{ColorError, Result};

/// Argument or result exchanged with the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Color(RgbColor),
    Number(Amount),
}

impl From<RgbColor> for Value {
    fn from(c: RgbColor) -> Self {
        Value::Color(c)
    }
}

impl From<Amount> for Value {
    fn from(a: Amount) -> Self {
        Value::Number(a)
    }
}

type ColorFn = dyn Fn(&[Value], &dyn DiagnosticsSink) -> Result<Value> + Send + Sync;

/// One callable entry: name, accepted argument counts, implementation.
#[derive(Clone)]
pub struct ColorFunction {
    name: String,
    min_args: usize,
    max_args: usize,
    func: Arc<ColorFn>,
}

impl ColorFunction {
    pub fn new(
        name: &str,
        min_args: usize,
        max_args: usize,
        func: impl Fn(&[Value], &dyn DiagnosticsSink) -> Result<Value> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.to_string(),
            min_args,
            max_args,
            func: Arc::new(func),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Accepted argument counts, inclusive.
    pub fn arity(&self) -> (usize, usize) {
        (self.min_args, self.max_args)
    }

    /// Check the argument count, then run.
    pub fn call(&self, args: &[Value], sink: &dyn DiagnosticsSink) -> Result<Value> {
        if args.len() < self.min_args || args.len() > self.max_args {
            let expected = if self.min_args == self.max_args {
                self.min_args.to_string()
            } else {
                format!("{} or {}", self.min_args, self.max_args)
            };
            return Err(ColorError::Arity {
                name: self.name.clone(),
                expected,
                got: args.len(),
            });
        }
        (self.func)(args, sink)
    }
}

impl fmt::Debug for ColorFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorFunction")
            .field("name", &self.name)
            .field("min_args", &self.min_args)
            .field("max_args", &self.max_args)
            .finish_non_exhaustive()
    }
}

/// Extension point a host exposes for native functions.
pub trait FunctionRegistry {
    fn register(&mut self, function: ColorFunction);
}

/// All color functions, keyed by host-facing name.
#[derive(Debug, Clone)]
pub struct ColorFunctionProvider {
    config: ProviderConfig,
    functions: BTreeMap<String, ColorFunction>,
}

impl Default for ColorFunctionProvider {
    fn default() -> Self {
        Self::new(ProviderConfig::default())
    }
}

impl ColorFunctionProvider {
    pub fn new(config: ProviderConfig) -> Self {
        let mut provider = Self {
            config,
            functions: BTreeMap::new(),
        };
        provider.register_builtins();
        provider
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.functions.keys().map(String::as_str).collect()
    }

    pub fn get(&self, name: &str) -> Option<&ColorFunction> {
        self.functions.get(name)
    }

    /// Look up `name` and call it.
    pub fn call(&self, name: &str, args: &[Value], sink: &dyn DiagnosticsSink) -> Result<Value> {
        trace!(name, args = args.len(), "color function call");
        let function = self
            .get(name)
            .ok_or_else(|| ColorError::UnknownFunction(name.to_string()))?;
        function.call(args, sink)
    }

    /// Register every function with the host.
    pub fn install_into(&self, registry: &mut dyn FunctionRegistry) {
        for function in self.functions.values() {
            registry.register(function.clone());
        }
    }

    fn register_builtins(&mut self) {
        self.register(adjustment("lighten", adjust::lighten));
        self.register(adjustment("darken", adjust::darken));
        self.register(adjustment("saturate", adjust::saturate));
        self.register(adjustment("desaturate", adjust::desaturate));

        self.register(ColorFunction::new("hue", 1, 1, |args, _| {
            let c = color_arg("hue", args, 0)?;
            Ok(Value::Number(Amount::Degrees(adjust::hue(c).into())))
        }));
        self.register(ColorFunction::new("saturation", 1, 1, |args, _| {
            let c = color_arg("saturation", args, 0)?;
            Ok(Value::Number(Amount::Percent(adjust::saturation(c).into())))
        }));
        self.register(ColorFunction::new("luminosity", 1, 1, |args, _| {
            let c = color_arg("luminosity", args, 0)?;
            Ok(Value::Number(Amount::Percent(adjust::luminosity(c).into())))
        }));

        self.register(ColorFunction::new("adjust-hue", 2, 2, |args, _| {
            let c = color_arg("adjust-hue", args, 0)?;
            // literal degree arguments are applied in whole degrees
            let degrees = amount_arg("adjust-hue", args, 1)?.validated()?.value().round();
            adjust::adjust_hue(c, degrees).map(Value::Color)
        }));
        self.register(ColorFunction::new("complement", 1, 1, |args, _| {
            let c = color_arg("complement", args, 0)?;
            Ok(Value::Color(adjust::complement(c)))
        }));
        self.register(ColorFunction::new("grayscale", 1, 1, |args, _| {
            let c = color_arg("grayscale", args, 0)?;
            Ok(Value::Color(adjust::grayscale(c)))
        }));

        let default_weight = self.config.default_mix_weight;
        self.register(ColorFunction::new("mix", 2, 3, move |args, _| {
            let c1 = color_arg("mix", args, 0)?;
            let c2 = color_arg("mix", args, 1)?;
            let weight = match args.get(2) {
                Some(_) => amount_arg("mix", args, 2)?,
                None => Amount::Percent(default_weight),
            };
            adjust::mix(c1, c2, Some(weight)).map(Value::Color)
        }));

        #[cfg(feature = "deprecated")]
        self.register_deprecated();
    }

    #[cfg(feature = "deprecated")]
    #[allow(deprecated)]
    fn register_deprecated(&mut self) {
        use crate::deprecated;

        if !self.config.deprecated_aliases {
            return;
        }
        type Alias = fn(RgbColor, Amount, &str, &dyn DiagnosticsSink) -> Result<RgbColor>;
        let aliases: [(&str, Alias); 4] = [
            ("lighten-percent", deprecated::lighten_percent),
            ("darken-percent", deprecated::darken_percent),
            ("saturate-percent", deprecated::saturate_percent),
            ("desaturate-percent", deprecated::desaturate_percent),
        ];
        for (name, alias) in aliases {
            let host_name = self.config.host_name.clone();
            self.register(ColorFunction::new(name, 2, 2, move |args, sink| {
                let c = color_arg(name, args, 0)?;
                let amount = amount_arg(name, args, 1)?;
                alias(c, amount, &host_name, sink).map(Value::Color)
            }));
        }
    }
}

impl FunctionRegistry for ColorFunctionProvider {
    fn register(&mut self, function: ColorFunction) {
        self.functions.insert(function.name.clone(), function);
    }
}

fn adjustment(name: &'static str, op: fn(RgbColor, Amount) -> Result<RgbColor>) -> ColorFunction {
    ColorFunction::new(name, 2, 2, move |args, _| {
        let c = color_arg(name, args, 0)?;
        let amount = amount_arg(name, args, 1)?;
        op(c, amount).map(Value::Color)
    })
}

fn color_arg(name: &str, args: &[Value], index: usize) -> Result<RgbColor> {
    match args.get(index) {
        Some(Value::Color(c)) => Ok(*c),
        _ => Err(ColorError::ArgumentType {
            name: name.to_string(),
            index,
            expected: "color",
        }),
    }
}

fn amount_arg(name: &str, args: &[Value], index: usize) -> Result<Amount> {
    match args.get(index) {
        Some(Value::Number(a)) => Ok(*a),
        _ => Err(ColorError::ArgumentType {
            name: name.to_string(),
            index,
            expected: "number",
        }),
    }
}

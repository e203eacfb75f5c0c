use anyhow::Context;

#[macro_export]
macro_rules! env_var {
    ($name:ident) => {
        const $name: &'static str = stringify!($name);
    };
}

/// Read `name`, falling back to `default` when unset.
pub fn var_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Read `name` as a port, falling back to `default` when unset.
pub fn port_or(name: &str, default: u16) -> anyhow::Result<u16> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("{} is not a valid port", name)),
        Err(_) => Ok(default),
    }
}

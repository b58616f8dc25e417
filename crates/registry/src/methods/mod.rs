//! Static method tables, one module per DomRobot resource group.

mod domain;
mod nameserver;

use inwx_types::MethodSpec;

/// Every built-in method, grouped by resource in registration order.
pub fn builtin_methods() -> Vec<MethodSpec> {
    let mut methods = nameserver::methods();
    methods.extend(domain::methods());
    methods
}

//! Init command presentation.

use std::path::Path;

pub fn format_init_summary(path: &Path, force: bool) -> String {
    let mut output = String::from("Initializing Concierge configuration...\n\n");
    if force {
        output.push_str(&format!("  ✓ {} (overwritten)\n\n", path.display()));
    } else {
        output.push_str(&format!("  ✓ {}\n\n", path.display()));
    }
    output.push_str("Set an API key for the configured provider (e.g. GEMINI_API_KEY), then:\n");
    output.push_str("  - concierge plan             # Interactive planner\n");
    output.push_str("  - concierge catalog          # Print the catalog\n");
    output.push_str("  - concierge cache status     # Inspect the catalog cache\n");
    output
}

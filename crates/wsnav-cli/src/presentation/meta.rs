use wsnav_types::WorkspaceMeta;

/// Print a metadata document section by section. With `show_empty`,
/// absent sections are called out instead of silently skipped (the `load`
/// command's verbose form).
pub fn print_meta(meta: &WorkspaceMeta, show_empty: bool) {
    if !meta.accounts.is_empty() {
        println!("Accounts:");
        for (label, id) in meta.sorted_accounts() {
            println!("  {} = {}", label, id);
        }
    } else if show_empty {
        println!("No Accounts defined.");
    }

    if !meta.info.tags.is_empty() {
        println!("Tags:");
        for tag in &meta.info.tags {
            println!("  - {}", tag);
        }
    } else if show_empty {
        println!("No Tags defined.");
    }

    if !meta.info.aliases.is_empty() {
        println!("Aliases:");
        for alias in &meta.info.aliases {
            println!("  - {}", alias);
        }
    } else if show_empty {
        println!("No Aliases defined.");
    }
}

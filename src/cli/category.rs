//! Category shell commands

use clap::Subcommand;

use crate::display::category::format_category_board;
use crate::error::{CentavoError, CentavoResult};
use crate::models::CategoryId;
use crate::taxonomy::{classify_name, Taxonomy};

/// Category subcommands
#[derive(Debug, Subcommand)]
pub enum CategoryCommands {
    /// Add a new category
    Add {
        /// Category name
        name: String,
        /// Icon asset key
        #[arg(short, long, default_value = "")]
        icon: String,
    },
    /// List all categories, grouped into expenses and income
    List,
    /// Rename a category
    Rename {
        /// Category name or ID
        category: String,
        /// New name
        new_name: String,
    },
    /// Remove one or more categories
    Remove {
        /// Category names or IDs
        categories: Vec<String>,
    },
}

fn resolve(taxonomy: &Taxonomy, identifier: &str) -> CentavoResult<CategoryId> {
    if let Some(category) = taxonomy.find_by_name(identifier) {
        return Ok(category.id);
    }

    taxonomy
        .categories()
        .iter()
        .find(|c| c.id.to_string() == identifier)
        .map(|c| c.id)
        .ok_or_else(|| CentavoError::category_not_found(identifier))
}

/// Handle a category command
pub fn handle_category_command(taxonomy: &mut Taxonomy, cmd: CategoryCommands) -> CentavoResult<()> {
    match cmd {
        CategoryCommands::Add { name, icon } => {
            let category = taxonomy.add_category(&name, &icon)?;
            println!(
                "Added category: {} ({})",
                category.name,
                classify_name(&category.name)
            );
        }

        CategoryCommands::List => {
            print!("{}", format_category_board(taxonomy));
        }

        CategoryCommands::Rename { category, new_name } => {
            let id = resolve(taxonomy, &category)?;
            let renamed = taxonomy.rename_category(id, &new_name)?;
            println!(
                "Renamed category: {} ({})",
                renamed.name,
                classify_name(&renamed.name)
            );
        }

        CategoryCommands::Remove { categories } => {
            if categories.is_empty() {
                println!("Nothing to remove.");
                return Ok(());
            }

            let mut ids = Vec::with_capacity(categories.len());
            for identifier in &categories {
                ids.push(resolve(taxonomy, identifier)?);
            }

            let removed = taxonomy.remove_categories(&ids);
            println!("Removed {} categor{}.", removed, if removed == 1 { "y" } else { "ies" });
        }
    }

    Ok(())
}

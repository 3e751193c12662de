use captains_log_core::templates::content_template;
use captains_log_core::LogStore;

use crate::app::AppContext;
use crate::cli::{JsonArgs, TemplateArgs};
use crate::errors::CliError;
use crate::output::{print_categories, print_json};

pub fn handle_types(ctx: &AppContext, args: &JsonArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let categories = store.list_categories()?;
    if args.json {
        return print_json(&categories);
    }
    print_categories(&categories);
    Ok(())
}

pub fn handle_template(args: &TemplateArgs) -> anyhow::Result<()> {
    let template = content_template(&args.log_type).ok_or_else(|| {
        CliError::not_found(
            format!("No template for log type \"{}\"", args.log_type),
            "Hint: Run `captains-log types` to see available log types.",
        )
    })?;
    println!("{}", template);
    Ok(())
}

use anyhow::{anyhow, bail, Context};
use harvestx_core::{FormField, Msg, ProductType, QualityGrade, Selector, View};

use crate::platform::ShellEvent;

pub const HELP: &str = "\
Commands:
  go <home|marketplace|create-listing|dashboard>
  search <text>            filter by product, farmer or location
  type <all|Vegetables|Fruits|Grains|Legumes|Herbs|Nuts|Other>
  grade <all|Premium|Grade1|Grade2|Standard|Organic|Certified>
  set <field> <value>      e.g. set productName Organic Tomatoes
  clear <field>
  submit                   submit the create-listing form
  help
  quit";

/// Maps one line of user input to a shell event.
pub fn parse_command(line: &str) -> anyhow::Result<ShellEvent> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(ShellEvent::Msg(Msg::NoOp));
    }
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let msg = match verb {
        "help" | "?" => return Ok(ShellEvent::Help),
        "quit" | "exit" => return Ok(ShellEvent::Quit),
        "go" => Msg::Navigate(rest.parse::<View>()?),
        "search" => Msg::SearchChanged(rest.to_string()),
        "type" => Msg::ProductTypeSelected(
            rest.parse::<Selector<ProductType>>()
                .context("expected `all` or a product type")?,
        ),
        "grade" => Msg::GradeSelected(
            rest.parse::<Selector<QualityGrade>>()
                .context("expected `all` or a quality grade")?,
        ),
        "set" => {
            let (field, value) = rest
                .split_once(char::is_whitespace)
                .ok_or_else(|| anyhow!("usage: set <field> <value>"))?;
            Msg::FormFieldChanged {
                field: field.parse::<FormField>()?,
                value: value.trim().to_string(),
            }
        }
        "clear" => Msg::FormFieldChanged {
            field: rest.parse::<FormField>()?,
            value: String::new(),
        },
        "submit" => Msg::ListingSubmitted,
        other => bail!("unknown command `{other}` (try `help`)"),
    };
    Ok(ShellEvent::Msg(msg))
}

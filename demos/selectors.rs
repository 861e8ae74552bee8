//! Prints the selectors from the builder's documentation.
//!
//! Run with `CSSB_LOG=/tmp/cssb.log` to record rejected fragments.

use cssb_rs::log_init::init_from_env;
use cssb_rs::{CSS_SELECTOR_BUILDER as builder, Result};

fn main() -> Result<()> {
    init_from_env()?;

    let editable = builder.id("main")?.css_class("container")?.css_class("editable")?;
    println!("{editable}");

    let link = builder.element("a")?.attribute(r#"href$=".png""#)?.pseudo_class("focus")?;
    println!("{link}");

    let nested = builder.combine(
        &builder
            .element("div")?
            .id("main")?
            .css_class("container")?
            .css_class("draggable")?,
        "+",
        &builder.combine(
            &builder.element("table")?.id("data")?,
            "~",
            &builder.combine(
                &builder.element("tr")?.pseudo_class("nth-of-type(even)")?,
                " ",
                &builder.element("td")?.pseudo_class("nth-of-type(even)")?,
            )?,
        )?,
    )?;
    println!("{nested}");

    match builder.css_class("x").and_then(|s| s.element("a")) {
        Ok(selector) => println!("{selector}"),
        Err(e) => eprintln!("{e}"),
    }

    Ok(())
}

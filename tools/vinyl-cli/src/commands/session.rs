//! Scripted session replay.

use std::fs;

use anyhow::{bail, Context as _, Result};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use vinyl_commerce::cart::CartTotals;
use vinyl_commerce::checkout::Receipt;
use vinyl_commerce::notify::NotificationSink;
use vinyl_commerce::storefront::{Action, SessionState, Storefront};
use vinyl_observability::LoggingSink;

use super::SessionArgs;
use crate::context::Context;
use crate::output::{mode_badge, Output};

/// A script file: either `{"steps": [...]}` or a bare list of actions.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ScriptFile {
    Steps { steps: Vec<Action> },
    Bare(Vec<Action>),
}

/// TOML scripts always use a `[[steps]]` table array.
#[derive(Debug, Deserialize)]
struct TomlScript {
    steps: Vec<Action>,
}

/// Final state printed with `--json`.
#[derive(Debug, Serialize)]
struct SessionSnapshot<'a> {
    session_id: &'a str,
    started_at: String,
    steps: usize,
    rejected: usize,
    state: &'a SessionState,
    totals: CartTotals,
    #[serde(skip_serializing_if = "Option::is_none")]
    receipt: Option<&'a Receipt>,
}

/// Outcome of replaying a script.
#[derive(Debug, Default)]
pub(crate) struct Replay {
    pub rejected: usize,
    pub placed_at: Option<DateTime<Local>>,
}

/// Run the session command.
pub async fn run(args: SessionArgs, ctx: &Context) -> Result<()> {
    let path = ctx.resolve_path(&args.script);
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read script: {}", path.display()))?;
    let steps = parse_script(&args.script, &content)?;

    let mut shop = ctx.storefront()?;
    let started = Local::now();

    ctx.output.header(&format!("Session {}", shop.session_id()));
    ctx.output.debug(&format!("{} step(s) from {}", steps.len(), path.display()));

    let replay = if args.log || ctx.config.logging.enabled {
        let logger = ctx.logger(shop.session_id());
        logger
            .info_builder("session started")
            .field("script", args.script.clone())
            .field_i64("steps", steps.len() as i64)
            .emit();
        let mut sink = LoggingSink::new(logger, ctx.output.clone());
        replay(&mut shop, &steps, &mut sink, &ctx.output, args.strict)
    } else {
        replay(&mut shop, &steps, &mut ctx.output.clone(), &ctx.output, args.strict)
    };

    if ctx.output.is_json() {
        ctx.output.json(&SessionSnapshot {
            session_id: shop.session_id().as_str(),
            started_at: started.to_rfc3339(),
            steps: steps.len(),
            rejected: replay.rejected,
            state: shop.state(),
            totals: shop.totals()?,
            receipt: shop.last_receipt(),
        });
    } else {
        if let (Some(receipt), Some(placed_at)) = (shop.last_receipt(), replay.placed_at) {
            print_receipt(&ctx.output, receipt, placed_at);
        }
        print_cart(&ctx.output, &shop)?;
        ctx.output.info(&format!(
            "{} step(s), {} rejected",
            steps.len(),
            replay.rejected
        ));
    }

    if args.strict && replay.rejected > 0 {
        bail!("Session stopped at a rejected step");
    }

    Ok(())
}

/// Parse a script; `.toml` files are TOML, everything else JSON.
pub(crate) fn parse_script(path: &str, content: &str) -> Result<Vec<Action>> {
    if path.ends_with(".toml") {
        let script: TomlScript = toml::from_str(content)
            .with_context(|| format!("Failed to parse TOML script: {}", path))?;
        return Ok(script.steps);
    }

    let script: ScriptFile = serde_json::from_str(content)
        .with_context(|| format!("Failed to parse JSON script: {}", path))?;
    Ok(match script {
        ScriptFile::Steps { steps } => steps,
        ScriptFile::Bare(steps) => steps,
    })
}

/// Dispatch `steps` in order, forwarding every notification to `sink`.
pub(crate) fn replay<S: NotificationSink>(
    shop: &mut Storefront,
    steps: &[Action],
    sink: &mut S,
    output: &Output,
    strict: bool,
) -> Replay {
    let mut outcome = Replay::default();

    for (i, step) in steps.iter().enumerate() {
        output.step(i + 1, steps.len(), &describe(shop, step));

        let dispatched = shop.apply(step.clone());
        let rejected = dispatched.is_rejected();
        if dispatched.receipt.is_some() {
            outcome.placed_at = Some(Local::now());
        }
        for notification in dispatched.notifications {
            sink.notify(notification);
        }

        if rejected {
            outcome.rejected += 1;
            if strict {
                break;
            }
        }
    }

    outcome
}

/// One-line description of a step, with record titles resolved.
fn describe(shop: &Storefront, action: &Action) -> String {
    let title = |id| {
        shop.catalog()
            .get(id)
            .map(|p| format!("\"{}\"", p.title))
            .unwrap_or_else(|| format!("#{}", id))
    };

    match action {
        Action::AddToCart { product_id } => format!("add {}", title(*product_id)),
        Action::RemoveFromCart { product_id } => format!("remove {}", title(*product_id)),
        Action::UpdateQuantity { product_id, quantity } => {
            format!("set {} to {}", title(*product_id), quantity)
        }
        Action::BeginCheckout => "checkout".to_string(),
        Action::SelectPayment { method } => format!("pay by {}", method.label()),
        Action::BackToCart => "back to cart".to_string(),
        Action::SubmitCheckout => "place order".to_string(),
        Action::Navigate { section } => format!("open {}", section.display_name()),
        Action::Search { query } => format!("search \"{}\"", query),
    }
}

/// Print the cart and checkout status.
pub(crate) fn print_cart(output: &Output, shop: &Storefront) -> Result<()> {
    let totals = shop.totals()?;
    let checkout = shop.checkout();

    output.header("Cart");
    if totals.is_empty() {
        output.info("Your cart is empty");
    } else {
        for line in shop.cart().lines() {
            let total = line.total(shop.cart().currency)?;
            output.list_item(&format!(
                "{} - {} × {} = {}",
                line.product.title,
                line.product.artist,
                line.quantity,
                total
            ));
        }
        output.kv("Items", &totals.items.to_string());
        output.kv("Subtotal", &totals.subtotal.to_string());
        if totals.has_free_delivery() {
            output.kv("Delivery", "free");
        } else {
            output.kv("Delivery", &totals.delivery.to_string());
        }
        output.kv("Total", &totals.grand_total.to_string());
    }

    output.kv("Mode", &mode_badge(checkout.mode));
    if let Some(method) = checkout.selected_payment {
        output.kv("Payment", method.label());
    }

    Ok(())
}

/// Print a placed order.
pub(crate) fn print_receipt(output: &Output, receipt: &Receipt, placed_at: DateTime<Local>) {
    output.header("Order placed");
    for line in &receipt.lines {
        output.list_item(&format!("{} × {}", line.product.title, line.quantity));
    }
    output.kv("Paid by", receipt.payment_method.label());
    output.kv("Items", &receipt.items.to_string());
    output.kv("Total", &receipt.total.to_string());
    output.kv("Placed at", &placed_at.format("%Y-%m-%d %H:%M").to_string());
}

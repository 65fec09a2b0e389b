//! One-shot ordering.

use anyhow::{bail, Result};
use vinyl_commerce::checkout::PaymentMethod;
use vinyl_commerce::storefront::Action;
use vinyl_commerce::ProductId;

use super::OrderArgs;
use crate::commands::session::{print_receipt, replay};
use crate::context::Context;

/// Run the order command.
pub async fn run(args: OrderArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.storefront()?;
    let steps = order_steps(&args.records, args.pay);

    let outcome = replay(&mut shop, &steps, &mut ctx.output.clone(), &ctx.output, true);

    let (Some(receipt), Some(placed_at)) = (shop.last_receipt(), outcome.placed_at) else {
        bail!("Order was not placed");
    };

    if ctx.output.is_json() {
        ctx.output.json(receipt);
    } else {
        print_receipt(&ctx.output, receipt, placed_at);
    }

    Ok(())
}

/// Actions that buy `records` and pay with `method`.
fn order_steps(records: &[u32], method: PaymentMethod) -> Vec<Action> {
    let mut steps: Vec<Action> = records
        .iter()
        .map(|id| Action::AddToCart {
            product_id: ProductId::new(*id),
        })
        .collect();
    steps.push(Action::BeginCheckout);
    steps.push(Action::SelectPayment { method });
    steps.push(Action::SubmitCheckout);
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use vinyl_commerce::notify::Notification;
    use vinyl_commerce::storefront::Storefront;

    use crate::output::Output;

    #[test]
    fn test_order_places_receipt() {
        let mut shop = Storefront::default();
        let mut sink: Vec<Notification> = Vec::new();
        let steps = order_steps(&[2, 2, 4], PaymentMethod::Transfer);

        let outcome = replay(&mut shop, &steps, &mut sink, &Output::new(false, true), true);

        assert_eq!(outcome.rejected, 0);
        assert!(outcome.placed_at.is_some());
        let receipt = shop.last_receipt().unwrap();
        assert_eq!(receipt.payment_method, PaymentMethod::Transfer);
        assert_eq!(receipt.items, 3);
        assert_eq!(receipt.total.amount, 2 * 2199 + 1899);
    }

    #[test]
    fn test_unknown_record_stops_order() {
        let mut shop = Storefront::default();
        let mut sink: Vec<Notification> = Vec::new();
        let steps = order_steps(&[1, 404], PaymentMethod::Card);

        let outcome = replay(&mut shop, &steps, &mut sink, &Output::new(false, true), true);

        assert_eq!(outcome.rejected, 1);
        assert!(outcome.placed_at.is_none());
        assert!(shop.last_receipt().is_none());
        assert_eq!(sink.last().unwrap().message, "Record #404 is not in the catalog");
    }
}

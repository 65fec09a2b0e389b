//! Interactive shopping session.

use anyhow::{bail, Result};
use chrono::Local;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use vinyl_commerce::catalog::Product;
use vinyl_commerce::checkout::{CheckoutMode, PaymentMethod};
use vinyl_commerce::notify::NotificationSink;
use vinyl_commerce::storefront::{Action, Section, Storefront};
use vinyl_observability::LoggingSink;

use super::ShopArgs;
use crate::commands::catalog::print_records;
use crate::commands::session::{print_cart, print_receipt};
use crate::context::Context;
use crate::output::Output;

/// Run the shop command.
pub async fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    if !ctx.output.is_interactive() {
        bail!("`vinyl shop` needs a terminal. Use `vinyl session <script>` for scripted sessions.");
    }

    let mut shop = ctx.storefront()?;
    ctx.output.header(&ctx.config.store.name);

    if args.log || ctx.config.logging.enabled {
        let logger = ctx.logger(shop.session_id());
        logger.info("session started");
        let mut sink = LoggingSink::new(logger, ctx.output.clone());
        Session::new(ctx, &mut shop, &mut sink).run(args.section)
    } else {
        let mut sink = ctx.output.clone();
        Session::new(ctx, &mut shop, &mut sink).run(args.section)
    }
}

/// Top-level menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Browse,
    Search,
    Cart,
    Checkout,
    Info(Section),
    Quit,
}

impl MenuItem {
    fn label(&self, shop: &Storefront) -> String {
        match self {
            MenuItem::Browse => "Browse the catalog".to_string(),
            MenuItem::Search => "Search".to_string(),
            MenuItem::Cart => format!("Cart ({})", shop.total_items()),
            MenuItem::Checkout => match shop.total_price() {
                Ok(total) if !total.is_zero() => format!("Checkout ({})", total),
                _ => "Checkout".to_string(),
            },
            MenuItem::Info(section) => section.display_name().to_string(),
            MenuItem::Quit => "Quit".to_string(),
        }
    }
}

const MENU: [MenuItem; 9] = [
    MenuItem::Browse,
    MenuItem::Search,
    MenuItem::Cart,
    MenuItem::Checkout,
    MenuItem::Info(Section::About),
    MenuItem::Info(Section::Delivery),
    MenuItem::Info(Section::Faq),
    MenuItem::Info(Section::Contacts),
    MenuItem::Quit,
];

struct Session<'a, S> {
    ctx: &'a Context,
    shop: &'a mut Storefront,
    sink: &'a mut S,
    theme: ColorfulTheme,
}

impl<'a, S: NotificationSink> Session<'a, S> {
    fn new(ctx: &'a Context, shop: &'a mut Storefront, sink: &'a mut S) -> Self {
        Self {
            ctx,
            shop,
            sink,
            theme: ColorfulTheme::default(),
        }
    }

    fn output(&self) -> &Output {
        &self.ctx.output
    }

    /// Dispatch an action and report whether it was rejected.
    fn dispatch(&mut self, action: Action) -> bool {
        let dispatched = self.shop.apply(action);
        let rejected = dispatched.is_rejected();

        for notification in dispatched.notifications {
            self.sink.notify(notification);
        }

        if let Some(receipt) = &dispatched.receipt {
            print_receipt(&self.ctx.output, receipt, Local::now());
        }
        rejected
    }

    /// Jump straight to a section.
    fn open(&mut self, section: Section) -> Result<()> {
        match section {
            Section::Catalog => self.browse(),
            Section::Search => self.search(),
            info => {
                self.info(info);
                Ok(())
            }
        }
    }

    fn run(mut self, start: Option<Section>) -> Result<()> {
        if let Some(section) = start {
            self.open(section)?;
        }

        loop {
            let labels: Vec<String> = MENU.iter().map(|item| item.label(self.shop)).collect();
            let choice = Select::with_theme(&self.theme)
                .with_prompt("What next?")
                .items(&labels)
                .default(0)
                .interact()?;

            match MENU[choice] {
                MenuItem::Browse => self.browse()?,
                MenuItem::Search => self.search()?,
                MenuItem::Cart => self.cart()?,
                MenuItem::Checkout => self.checkout()?,
                MenuItem::Info(section) => self.info(section),
                MenuItem::Quit => break,
            }
        }

        if !self.shop.cart().is_empty() {
            self.output().warn(&format!(
                "Leaving {} record(s) in the cart",
                self.shop.total_items()
            ));
        }
        Ok(())
    }

    fn browse(&mut self) -> Result<()> {
        self.dispatch(Action::Navigate {
            section: Section::Catalog,
        });
        let catalog = self.shop.catalog().clone();
        let records: Vec<&Product> = catalog.iter().collect();
        self.pick_record(&records)
    }

    fn search(&mut self) -> Result<()> {
        self.dispatch(Action::Navigate {
            section: Section::Search,
        });
        let query: String = Input::with_theme(&self.theme)
            .with_prompt("Title, artist or genre")
            .with_initial_text(self.shop.search_query())
            .allow_empty(true)
            .interact_text()?;
        self.dispatch(Action::Search { query });

        let catalog = self.shop.catalog().clone();
        let results = self.shop.search_results();
        if results.is_idle() {
            self.output().info("Type a title, artist or genre to search");
            return Ok(());
        }
        if results.is_nothing_found() {
            self.output()
                .warn(&format!("Nothing found for \"{}\"", self.shop.search_query()));
            return Ok(());
        }

        let ids: Vec<_> = results.records().iter().map(|p| p.id).collect();
        let records: Vec<&Product> = ids.iter().filter_map(|id| catalog.get(*id)).collect();
        self.pick_record(&records)
    }

    fn pick_record(&mut self, records: &[&Product]) -> Result<()> {
        let currency = self.shop.catalog().currency();
        print_records(self.ctx, records, currency);

        let mut labels: Vec<String> = records
            .iter()
            .map(|p| format!("{} - {} ({})", p.title, p.artist, p.unit_price(currency)))
            .collect();
        labels.push("Back".to_string());

        let choice = Select::with_theme(&self.theme)
            .with_prompt("Add to cart")
            .items(&labels)
            .default(0)
            .interact()?;

        if let Some(product) = records.get(choice) {
            self.dispatch(Action::AddToCart {
                product_id: product.id,
            });
        }
        Ok(())
    }

    fn cart(&mut self) -> Result<()> {
        loop {
            print_cart(self.output(), self.shop)?;
            if self.shop.cart().is_empty() {
                return Ok(());
            }

            let mut labels: Vec<String> = self
                .shop
                .cart()
                .lines()
                .iter()
                .map(|l| format!("{} × {}", l.product.title, l.quantity))
                .collect();
            labels.push("Back".to_string());

            let choice = Select::with_theme(&self.theme)
                .with_prompt("Edit a line")
                .items(&labels)
                .default(0)
                .interact()?;

            let Some(line) = self.shop.cart().lines().get(choice) else {
                return Ok(());
            };
            let product_id = line.product.id;
            let current = line.quantity;

            let quantity: i64 = Input::with_theme(&self.theme)
                .with_prompt("Quantity (0 removes)")
                .default(i64::from(current))
                .interact_text()?;

            if quantity <= 0 {
                self.dispatch(Action::RemoveFromCart { product_id });
            } else {
                self.dispatch(Action::UpdateQuantity {
                    product_id,
                    quantity,
                });
            }
        }
    }

    fn checkout(&mut self) -> Result<()> {
        if self.dispatch(Action::BeginCheckout) {
            return Ok(());
        }

        while self.shop.checkout().mode == CheckoutMode::Checkout {
            print_cart(self.output(), self.shop)?;

            let mut labels: Vec<String> = PaymentMethod::ALL
                .iter()
                .map(|m| match self.shop.checkout().selected_payment {
                    Some(selected) if selected == *m => format!("● {}", m.label()),
                    _ => format!("○ {}", m.label()),
                })
                .collect();
            labels.push("Place order".to_string());
            labels.push("Back to cart".to_string());

            let choice = Select::with_theme(&self.theme)
                .with_prompt("Payment")
                .items(&labels)
                .default(0)
                .interact()?;

            if let Some(method) = PaymentMethod::ALL.get(choice) {
                self.dispatch(Action::SelectPayment { method: *method });
            } else if choice == PaymentMethod::ALL.len() {
                let total = self.shop.total_price()?;
                let confirmed = Confirm::with_theme(&self.theme)
                    .with_prompt(format!("Pay {}?", total))
                    .default(true)
                    .interact()?;
                if confirmed {
                    self.dispatch(Action::SubmitCheckout);
                }
            } else {
                self.dispatch(Action::BackToCart);
            }
        }
        Ok(())
    }

    fn info(&mut self, section: Section) {
        self.dispatch(Action::Navigate { section });
        self.output().header(section.display_name());
        for line in section_notes(section) {
            self.output().list_item(line);
        }
    }
}

/// Static text of the informational sections.
fn section_notes(section: Section) -> &'static [&'static str] {
    match section {
        Section::About => &[
            "A specialist vinyl shop run by analog sound enthusiasts.",
            "Every record is hand-picked for sound quality and authenticity.",
        ],
        Section::Delivery => &[
            "Across Russia: free on orders from 5000 ₽, 3-7 working days.",
            "Moscow courier: same day when ordered before 14:00, 300 ₽.",
            "Pickup from the showroom in central Moscow: free.",
        ],
        Section::Faq => &[
            "Payment: bank card, e-wallet or bank transfer.",
            "Condition: every record is new or mint and checked before dispatch.",
            "Returns: within 14 days if the record is still sealed.",
        ],
        Section::Contacts => &[
            "Showroom: Moscow, Primernaya st. 1",
            "Phone: +7 (495) 123-45-67",
            "Email: info@vinylarchive.ru",
            "Mon-Fri 10:00-20:00, Sat-Sun 11:00-18:00",
        ],
        Section::Catalog | Section::Search => &[],
    }
}

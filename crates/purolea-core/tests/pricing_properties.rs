//! Pricing Property Tests
//!
//! Guarantees every quote must honour, checked across the quantity menu,
//! the catalog and both supply toggles.

use purolea_core::{
    compute_breakdown, standard_catalog, CostBreakdown, FieldUpdate, Money, QuoteInput,
    QuoteSession, Volume, QUANTITY_OPTIONS,
};

/// Every catalog product × every menu quantity × every toggle combination.
fn input_grid() -> Vec<QuoteInput> {
    let mut inputs = Vec::new();
    for product in standard_catalog().list_products() {
        for &quantity in QUANTITY_OPTIONS.iter().chain([1, 499, 999].iter()) {
            for (packaging, label) in [(false, false), (true, false), (false, true), (true, true)] {
                inputs.push(QuoteInput {
                    selected_product_id: Some(product.id.clone()),
                    formula_cost_per_volume: product.base_formula_cost_per_volume,
                    product_size: product.suggested_size,
                    packaging_cost_per_unit: Money::from_cents(350),
                    quantity,
                    client_supplies_packaging: packaging,
                    client_supplies_label: label,
                    notes: String::new(),
                });
            }
        }
    }
    inputs
}

fn cents(costs: &CostBreakdown) -> [i64; 6] {
    [
        costs.formula_cost_per_unit.cents(),
        costs.packaging_cost_per_unit.cents(),
        costs.label_cost_per_unit.cents(),
        costs.manufacturing_fee_per_unit.cents(),
        costs.total_unit_cost.cents(),
        costs.total_project_cost.cents(),
    ]
}

#[test]
fn unit_cost_is_sum_of_components() {
    for input in input_grid() {
        let c = compute_breakdown(&input);
        assert_eq!(
            c.total_unit_cost,
            c.formula_cost_per_unit
                + c.packaging_cost_per_unit
                + c.label_cost_per_unit
                + c.manufacturing_fee_per_unit,
            "{input:?}"
        );
    }
}

#[test]
fn project_cost_is_unit_cost_times_quantity() {
    for input in input_grid() {
        let c = compute_breakdown(&input);
        assert_eq!(
            c.total_project_cost.ten_thousandths(),
            c.total_unit_cost.ten_thousandths() * input.quantity as i64,
            "{input:?}"
        );
    }
}

#[test]
fn line_totals_add_up_to_project_total() {
    for input in input_grid() {
        let c = compute_breakdown(&input);
        let extended: Money = c.lines().iter().map(|l| l.extended(input.quantity)).sum();
        assert_eq!(extended, c.total_project_cost, "{input:?}");
    }
}

#[test]
fn tiers_are_closed_at_lower_edge() {
    let at = |quantity| {
        compute_breakdown(&QuoteInput {
            quantity,
            ..QuoteInput::default()
        })
    };

    let c = at(500);
    assert_eq!(c.manufacturing_fee_per_unit.cents(), 300);
    assert_eq!(c.label_cost_per_unit.cents(), 65);

    let c = at(499);
    assert_eq!(c.manufacturing_fee_per_unit.cents(), 400);
    assert_eq!(c.label_cost_per_unit.cents(), 75);

    let c = at(1000);
    assert_eq!(c.manufacturing_fee_per_unit.cents(), 250);
    assert_eq!(c.label_cost_per_unit.cents(), 50);
}

#[test]
fn client_packaging_forces_zero_packaging() {
    for cost in [0, 1, 350, 99_999] {
        let input = QuoteInput {
            packaging_cost_per_unit: Money::from_cents(cost),
            client_supplies_packaging: true,
            ..QuoteInput::default()
        };
        assert!(compute_breakdown(&input).packaging_cost_per_unit.is_zero());
    }
}

#[test]
fn client_label_forces_zero_label() {
    for input in input_grid().into_iter().filter(|i| i.client_supplies_label) {
        assert!(compute_breakdown(&input).label_cost_per_unit.is_zero());
    }
}

#[test]
fn recomputation_is_idempotent() {
    for input in input_grid() {
        assert_eq!(cents(&compute_breakdown(&input)), cents(&compute_breakdown(&input)));
    }
}

#[test]
fn scenario_serum_250_units() {
    let input = QuoteInput {
        formula_cost_per_volume: Money::from_cents(1550),
        product_size: Volume::from_units(1),
        packaging_cost_per_unit: Money::from_cents(350),
        quantity: 250,
        ..QuoteInput::default()
    };

    assert_eq!(
        cents(&compute_breakdown(&input)),
        [1550, 350, 75, 400, 2375, 593_750]
    );
}

#[test]
fn scenario_serum_1000_units() {
    let input = QuoteInput {
        formula_cost_per_volume: Money::from_cents(1550),
        product_size: Volume::from_units(1),
        packaging_cost_per_unit: Money::from_cents(350),
        quantity: 1000,
        ..QuoteInput::default()
    };

    assert_eq!(
        cents(&compute_breakdown(&input)),
        [1550, 350, 50, 250, 2200, 2_200_000]
    );
}

#[test]
fn selecting_every_product_keeps_other_fields() {
    for product in standard_catalog().list_products() {
        let mut session = QuoteSession::new();
        session.set_field(FieldUpdate::Quantity(1500));
        session.set_field(FieldUpdate::ClientSuppliesLabel(true));
        session.set_field(FieldUpdate::Notes("matte finish".to_string()));
        let before = session.input().clone();

        assert!(session.select_product(&product.id));

        let after = session.input();
        assert_eq!(after.formula_cost_per_volume, product.base_formula_cost_per_volume);
        assert_eq!(after.product_size, product.suggested_size);
        assert_eq!(after.quantity, before.quantity);
        assert_eq!(after.client_supplies_packaging, before.client_supplies_packaging);
        assert_eq!(after.client_supplies_label, before.client_supplies_label);
        assert_eq!(after.packaging_cost_per_unit, before.packaging_cost_per_unit);
        assert_eq!(after.notes, before.notes);
        assert_eq!(*session.costs(), compute_breakdown(after));
    }
}

#[test]
fn selecting_unknown_product_changes_nothing() {
    let mut session = QuoteSession::new();
    session.set_field(FieldUpdate::Quantity(750));
    let before = session.snapshot();

    for id in ["", "SERUM", "serum ", "shampoo"] {
        assert!(!session.select_product(id));
        assert_eq!(session.snapshot(), before);
    }
}

#[test]
fn raw_edits_never_fail_on_bad_numbers() {
    let mut session = QuoteSession::new();
    for field in ["formulaCostPerVolume", "productSize", "packagingCostPerUnit", "quantity"] {
        let update = FieldUpdate::from_raw(field, "not a number").unwrap();
        session.set_field(update);
    }

    let input = session.input();
    assert!(input.formula_cost_per_volume.is_zero());
    assert_eq!(input.product_size, Volume::zero());
    assert!(input.packaging_cost_per_unit.is_zero());
    assert_eq!(input.quantity, 0);
    assert!(session.costs().total_project_cost.is_zero());
}

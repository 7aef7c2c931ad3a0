//! The order pricing engine.

use crate::cart::LineItem;
use crate::customer::CustomerRecord;
use crate::error::OrderError;
use crate::money::Money;
use crate::pricing::{LineItemPricing, PricingBreakdown, PricingConfig};

/// Price a validated line-item list for a customer.
///
/// Deterministic and side-effect free. The steps run in a fixed order:
///
/// 1. subtotal over all line items
/// 2. case-classified unit count
/// 3. volume discount, if the count meets the threshold
/// 4. taxable amount = subtotal - discount
/// 5. tax on the taxable amount, if the customer classification is
///    taxable (discount applies before tax)
/// 6. keg-classified unit count
/// 7. deposit total
/// 8. total = taxable amount + tax + deposits
///
/// Well-typed input never fails a business rule here; the cart builder
/// has already excluded empty carts, bad quantities, and stock
/// violations. The only failure modes are the `EmptyCart` guard and
/// checked-arithmetic overflow.
pub fn price_order(
    items: &[LineItem],
    customer: &CustomerRecord,
    config: &PricingConfig,
) -> Result<PricingBreakdown, OrderError> {
    if items.is_empty() {
        return Err(OrderError::EmptyCart);
    }

    let currency = config.currency;
    for item in items {
        if item.unit_price.currency != currency {
            return Err(OrderError::CurrencyMismatch {
                expected: currency.code().to_string(),
                got: item.unit_price.currency.code().to_string(),
            });
        }
    }

    let line_items = items
        .iter()
        .map(|item| {
            let total = item.line_total().ok_or(OrderError::Overflow)?;
            Ok(LineItemPricing {
                product_name: item.product_name.clone(),
                unit_price: item.unit_price,
                quantity: item.quantity,
                total,
            })
        })
        .collect::<Result<Vec<_>, OrderError>>()?;

    let subtotal = Money::try_sum(line_items.iter().map(|l| &l.total), currency)
        .ok_or(OrderError::Overflow)?;

    let case_units = unit_count(items, |item| item.kind.is_case())?;
    let discount = if case_units >= config.case_discount_threshold {
        subtotal.multiply_decimal(config.case_discount_rate)
    } else {
        Money::zero(currency)
    };

    let taxable = subtotal
        .try_subtract(&discount)
        .ok_or(OrderError::Overflow)?;

    let tax = if config.is_taxable(customer) {
        taxable.multiply_decimal(config.tax_rate)
    } else {
        Money::zero(currency)
    };

    let deposit_units = unit_count(items, |item| item.kind.is_keg())?;
    let deposit_total = config
        .keg_deposit
        .try_multiply(deposit_units)
        .ok_or(OrderError::Overflow)?;

    let total = taxable
        .try_add(&tax)
        .and_then(|t| t.try_add(&deposit_total))
        .ok_or(OrderError::Overflow)?;

    Ok(PricingBreakdown {
        subtotal,
        discount,
        tax,
        deposit_total,
        total,
        case_units,
        deposit_units,
        line_items,
    })
}

fn unit_count(items: &[LineItem], pred: impl Fn(&LineItem) -> bool) -> Result<i64, OrderError> {
    items
        .iter()
        .filter(|item| pred(item))
        .try_fold(0i64, |acc, item| acc.checked_add(item.quantity))
        .ok_or(OrderError::Overflow)
}

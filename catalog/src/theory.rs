//! The five-step theory primer shown before the module track.

/// One step of the course intro sequence.
#[derive(Debug, Clone, Copy)]
pub struct TheoryStep {
    pub title: &'static str,
    pub content: &'static str,
}

const THEORY_STEPS: &[TheoryStep] = &[
    TheoryStep {
        title: "Who is your unit?",
        content: "The unit is the smallest thing that generates revenue: a \
transaction for e-commerce and marketplaces, a subscriber for SaaS, an order \
for delivery services, a click for ad-driven models.\n\n\
The question to answer: what exactly are we being paid for?",
    },
    TheoryStep {
        title: "Computing the margin",
        content: "Contribution margin tells you whether selling the product earns \
anything at all.\n\n\
**Formula**: Price - COGS = Unit Margin\n\n\
COGS covers only the direct per-unit costs: the goods themselves, variable \
delivery, payment fees. Marketing, rent, and salaries stay out.",
    },
    TheoryStep {
        title: "Cost of entry (CAC)",
        content: "Customer Acquisition Cost is what one new customer costs to win.\n\n\
**Formula**: Total Marketing Spend / New Customers\n\n\
Count everything: online and offline ads, marketer salaries, tools and \
services, partner commissions. And compute CAC per channel.",
    },
    TheoryStep {
        title: "Lifetime value (LTV)",
        content: "Lifetime Value is the revenue one customer brings over their whole \
life with the product.\n\n\
**Simple formula**: ARPU x Average Lifetime\n\
**Via churn**: ARPU / Monthly Churn Rate\n\n\
Example: ARPU $50/month at 5% churn gives LTV = 50 / 0.05 = $1000.\n\n\
The core rule: LTV should be at least three times CAC.",
    },
    TheoryStep {
        title: "When the model converges",
        content: "The economics converge when **LTV/CAC >= 3**, **payback is within \
12 months**, and **net churn <= 0** (expansion covers the leavers).\n\n\
If the numbers do not converge: raise the price, cut CAC, improve retention, \
or add upsell.",
    },
];

/// The primer steps, in course order.
#[must_use]
pub fn theory_steps() -> &'static [TheoryStep] {
    THEORY_STEPS
}

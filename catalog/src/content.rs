//! The module content table, in catalogue order.
//!
//! Entry order must match `ModuleSlug::all()`; the exhaustiveness test in
//! `lib.rs` pins the two together.

use unitlab_types::ModuleSlug;

use crate::{ModuleContent, Practice, WorkedExample};

pub(crate) const CONTENT: &[ModuleContent] = &[
    ModuleContent {
        slug: ModuleSlug::UnitMargin,
        description: "Identify what earns the money and how much net income one sale leaves.",
        formula: "Unit Margin = Price - COGS",
        example: WorkedExample {
            description: "Coffee sells for 150, cost of goods is 50",
            calculation: "150 - 50 = 100",
            answer: 100.0,
        },
        practice: Practice {
            question: "Product price is 2000, COGS is 800. What is the unit margin?",
            expected: 1200.0,
            hint: "Margin = price minus cost of goods",
        },
        theory: "A unit is the basic thing that brings money into the business: a \
subscriber for SaaS, an order for e-commerce, a cup of coffee for a cafe.\n\n\
**Unit Margin** shows how much money one sale leaves after direct costs (COGS).\n\n\
Formula: **Price - COGS = Unit Margin**\n\n\
If the margin is negative, every sale loses money.",
    },
    ModuleContent {
        slug: ModuleSlug::Cac,
        description: "Work out what acquiring one paying customer costs.",
        formula: "CAC = Marketing Spend / New Customers",
        example: WorkedExample {
            description: "Spent 100,000 on ads, acquired 50 customers",
            calculation: "100,000 / 50 = 2,000",
            answer: 2000.0,
        },
        practice: Practice {
            question: "Ad budget is 500,000, 200 customers acquired. CAC = ?",
            expected: 2500.0,
            hint: "CAC = spend / number of customers",
        },
        theory: "**Customer Acquisition Cost (CAC)** is the cost of winning one \
paying customer.\n\n\
Formula: **CAC = Marketing Spend / New Paying Customers**\n\n\
Count ALL acquisition spend: ads, marketer salaries, tooling, commissions.\n\n\
Rule of thumb: CAC has to pay itself back before the customer churns.",
    },
    ModuleContent {
        slug: ModuleSlug::Ltv,
        description: "How much money a customer brings in before they leave.",
        formula: "LTV = ARPU x Avg. Lifetime",
        example: WorkedExample {
            description: "ARPU is $50/month, the customer stays 24 months",
            calculation: "50 x 24 = $1200",
            answer: 1200.0,
        },
        practice: Practice {
            question: "ARPU is 3000/month, average customer lifetime is 18 months. LTV = ?",
            expected: 54000.0,
            hint: "LTV = average check x number of periods",
        },
        theory: "**Lifetime Value (LTV)** is the total revenue one customer brings \
over the whole relationship.\n\n\
Simple formula: **LTV = ARPU x Average Customer Lifetime**\n\n\
Advanced: **LTV = ARPU / Churn Rate**\n\n\
LTV is the headline measure of customer value. When LTV exceeds CAC the \
business can grow.",
    },
    ModuleContent {
        slug: ModuleSlug::LtvCacRatio,
        description: "Compare LTV against CAC to judge whether the model holds up.",
        formula: "LTV/CAC >= 3",
        example: WorkedExample {
            description: "LTV is $900, CAC is $200",
            calculation: "900 / 200 = 4.5",
            answer: 4.5,
        },
        practice: Practice {
            question: "LTV is 45,000, CAC is 12,000. What is the ratio?",
            expected: 3.75,
            hint: "Just divide LTV by CAC",
        },
        theory: "**LTV/CAC Ratio** is the gold standard for judging unit economics.\n\n\
Bands:\n\
- **< 1** - losing money on every customer\n\
- **1-3** - risky, acquisition is too expensive\n\
- **>= 3** - healthy economics\n\
- **> 5** - possibly under-investing in growth\n\n\
Optimum: **LTV/CAC between 3 and 5**",
    },
    ModuleContent {
        slug: ModuleSlug::Churn,
        description: "Measure customer loss and what it does to profit.",
        formula: "Churn Rate = Lost Customers / Total Customers x 100%",
        example: WorkedExample {
            description: "Had 1000 customers, 50 left",
            calculation: "50 / 1000 x 100 = 5%",
            answer: 5.0,
        },
        practice: Practice {
            question: "Out of 2000 customers, 140 left this month. Churn = ?%",
            expected: 7.0,
            hint: "Churn = (lost / total) x 100",
        },
        theory: "**Churn Rate** is the share of customers who leave per period.\n\n\
Formula: **(Lost Customers / Start Customers) x 100%**\n\n\
Link to LTV: **Average Lifetime = 1 / Churn Rate**\n\n\
At 5% churn the average lifetime is 20 months; at 10% it is 10 months. \
Cutting churn by one point can lift LTV by 10-30%.",
    },
    ModuleContent {
        slug: ModuleSlug::PaybackPeriod,
        description: "How many months until acquisition spend comes back.",
        formula: "Payback = CAC / (ARPU x Margin)",
        example: WorkedExample {
            description: "CAC is $300, ARPU is $50, margin is 80%",
            calculation: "300 / (50 x 0.8) = 7.5 months",
            answer: 7.5,
        },
        practice: Practice {
            question: "CAC is 15,000, ARPU is 2,500, margin is 60%. Payback = ? months",
            expected: 10.0,
            hint: "Payback = CAC / (ARPU x margin)",
        },
        theory: "**CAC Payback Period** is the time a customer needs to repay the \
cost of acquiring them.\n\n\
Formula: **CAC / (ARPU x Gross Margin)**\n\n\
Benchmarks:\n\
- **< 6 months** - excellent\n\
- **6-12 months** - fine for B2B\n\
- **> 18 months** - dangerous, needs deep pockets",
    },
    ModuleContent {
        slug: ModuleSlug::Arpu,
        description: "Average Revenue Per User, the base revenue metric.",
        formula: "ARPU = Total Revenue / Active Users",
        example: WorkedExample {
            description: "Revenue is 1,000,000 with 500 active users",
            calculation: "1,000,000 / 500 = 2,000",
            answer: 2000.0,
        },
        practice: Practice {
            question: "Monthly revenue is 3,600,000, MAU is 1200. ARPU = ?",
            expected: 3000.0,
            hint: "ARPU = revenue / users",
        },
        theory: "**ARPU (Average Revenue Per User)** is the average income per user \
per period.\n\n\
Formula: **Total Revenue / Number of Users**\n\n\
Variants: **ARPU** over all users, **ARPPU** over paying users only, \
**ARPA** per account (B2B).\n\n\
ARPU x Users = Revenue - the basic growth equation.",
    },
    ModuleContent {
        slug: ModuleSlug::Cohorts,
        description: "Track groups of users who arrived in the same period.",
        formula: "Retention(n) = Active in Month N / Cohort Size x 100%",
        example: WorkedExample {
            description: "January cohort of 100 users, 45 still active in March",
            calculation: "45 / 100 = 45% retention",
            answer: 45.0,
        },
        practice: Practice {
            question: "A cohort of 500 people; 175 active after 3 months. Retention = ?%",
            expected: 35.0,
            hint: "Retention = (active / initial) x 100",
        },
        theory: "**Cohort analysis** follows the behavior of users acquired in the \
same period.\n\n\
It lets you see real month-by-month retention, compare acquisition channels, \
and notice product changes.\n\n\
A typical cohort table shows the share of users still active 1, 2, 3... \
months after signup.",
    },
    ModuleContent {
        slug: ModuleSlug::KFactor,
        description: "How many free customers one existing customer brings in.",
        formula: "K = Invites x Conversion Rate",
        example: WorkedExample {
            description: "Everyone sends 5 invites, conversion is 20%",
            calculation: "5 x 0.2 = 1.0",
            answer: 1.0,
        },
        practice: Practice {
            question: "A user sends 8 invites, conversion is 15%. K-factor = ?",
            expected: 1.2,
            hint: "K = invites x conversion",
        },
        theory: "**K-Factor** is the virality coefficient, a measure of organic \
growth.\n\n\
Formula: **K = i x c**, where i is the average number of invites and c is \
invite conversion.\n\n\
- **K < 1** - decaying growth, ads required\n\
- **K = 1** - self-sustaining growth\n\
- **K > 1** - viral growth (rare!)\n\n\
Above 1, the product grows with no marketing budget.",
    },
    ModuleContent {
        slug: ModuleSlug::MrrGrowth,
        description: "Monthly recurring revenue and its components.",
        formula: "Net MRR = New + Expansion - Churned - Contraction",
        example: WorkedExample {
            description: "New $10k, expansion $3k, churn $2k, contraction $1k",
            calculation: "10 + 3 - 2 - 1 = $10k net growth",
            answer: 10.0,
        },
        practice: Practice {
            question: "New MRR 800k, expansion 200k, churned 350k. Net growth = ?k",
            expected: 650.0,
            hint: "Net = new + expansion - churned",
        },
        theory: "**MRR (Monthly Recurring Revenue)** is the engine metric of \
subscription businesses.\n\n\
Growth components: **New MRR** from new customers, **Expansion MRR** from \
upgrades, **Churned MRR** lost to leavers, **Contraction MRR** from \
downgrades.\n\n\
**Net New MRR = New + Expansion - Churned - Contraction**\n\n\
ARR = MRR x 12",
    },
    ModuleContent {
        slug: ModuleSlug::BurnRate,
        description: "How much money the company loses each month.",
        formula: "Runway = Cash / Monthly Burn",
        example: WorkedExample {
            description: "$500k in the bank, spending $50k/month",
            calculation: "500 / 50 = 10 months of runway",
            answer: 10.0,
        },
        practice: Practice {
            question: "Cash is 12,000,000, burn rate is 1,500,000/month. Runway = ? months",
            expected: 8.0,
            hint: "Runway = cash / burn rate",
        },
        theory: "**Burn Rate** is how fast the company spends money.\n\n\
**Gross Burn** is all spending; **Net Burn** is spending minus income.\n\n\
**Runway = Cash / Net Burn** - how many months the company survives.\n\n\
Under 6 months of runway means raise now; 12-18 months is comfortable. \
Watch the trend, not just the level.",
    },
    ModuleContent {
        slug: ModuleSlug::Freemium,
        description: "The economics of free and paying users together.",
        formula: "Blended ARPU = (Free x 0 + Paid x ARPPU) / Total",
        example: WorkedExample {
            description: "90% free, 10% pay $20",
            calculation: "(0.9 x 0 + 0.1 x 20) = $2 blended",
            answer: 2.0,
        },
        practice: Practice {
            question: "80% free users, 20% pay 1500. Blended ARPU = ?",
            expected: 300.0,
            hint: "ARPU = (paying share x their check)",
        },
        theory: "**Freemium** pairs a free product with paid upgrades.\n\n\
Key metrics: **free-to-paid conversion** (typically 2-5%), **blended ARPU** \
across everyone, **ARPPU** over payers only.\n\n\
Free users are not free: servers, support, virality.\n\n\
The goal is maximizing conversion into payers.",
    },
    ModuleContent {
        slug: ModuleSlug::B2bSalesCycle,
        description: "Unit economics under long corporate sales cycles.",
        formula: "Effective CAC = (Sales + Marketing) / Closed Deals",
        example: WorkedExample {
            description: "Sales $200k/year, marketing $100k, 30 deals closed",
            calculation: "(200+100) / 30 = $10k CAC",
            answer: 10000.0,
        },
        practice: Practice {
            question: "Sales costs 6,000,000, marketing 2,000,000, 40 deals. CAC = ?",
            expected: 200_000.0,
            hint: "CAC = (sales + marketing) / deals",
        },
        theory: "**B2B unit economics** has to absorb a long deal cycle.\n\n\
Expect high CAC (the sales team counts), long payback (6-24 months), high \
LTV (multi-year contracts), and expansion revenue mattering more than new \
revenue.\n\n\
CAC must include sales salaries, marketing, presales and demos, and the \
time to close.",
    },
    ModuleContent {
        slug: ModuleSlug::UnitEconomicsCanvas,
        description: "Pull every metric into one picture of the business model.",
        formula: "Profit = (LTV - CAC) x New Customers - Fixed Costs",
        example: WorkedExample {
            description: "LTV $500, CAC $100, 1000 new customers, fixed $200k",
            calculation: "(500-100) x 1000 - 200,000 = $200k profit",
            answer: 200_000.0,
        },
        practice: Practice {
            question: "LTV 30,000, CAC 8,000, 500 customers, fixed 5,000,000. Profit = ?",
            expected: 6_000_000.0,
            hint: "Profit = (LTV - CAC) x customers - fixed",
        },
        theory: "The **Unit Economics Canvas** lays the whole model out at once.\n\n\
Levels of analysis:\n\
1. **Unit level**: price, COGS, margin\n\
2. **Customer level**: CAC, LTV, ratio\n\
3. **Company level**: revenue, costs, profit\n\n\
The canvas surfaces the bottleneck, supports growth scenarios, and grounds \
investment decisions.",
    },
    ModuleContent {
        slug: ModuleSlug::FinalCase,
        description: "A complete project economics calculation, end to end.",
        formula: "All Metrics Combined",
        example: WorkedExample {
            description: "A full startup walkthrough",
            calculation: "See the complete case study",
            answer: 0.0,
        },
        practice: Practice {
            question: "SaaS: price $99, COGS $10, marketing $50k/month, 100 new \
customers, churn 5%. LTV/CAC = ?",
            expected: 3.56,
            hint: "CAC = $500, LTV = ARPU / churn = $1780",
        },
        theory: "The **final case** pulls the whole course together.\n\n\
Full calculation order:\n\
1. Define the unit and its margin\n\
2. Compute CAC across all channels\n\
3. Measure ARPU and churn\n\
4. Derive LTV\n\
5. Check the LTV/CAC ratio\n\
6. Estimate the payback period\n\
7. Project MRR\n\
8. Compute runway\n\n\
A healthy model: LTV/CAC >= 3, payback under 12 months, net churn at or \
below zero.",
    },
];

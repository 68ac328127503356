//! Canned spending suggestions derived from the analysis

use crate::models::Category;

/// Projected monthly spend above which a warning is issued (strictly greater)
pub const MONTHLY_WARNING_THRESHOLD: f64 = 10_000.0;

const SPENDING_WISELY: &str = "You are spending wisely!";
const OVER_THRESHOLD: &str = "⚠ Warning: You may cross ₹10,000 this month!";
const UNDER_CONTROL: &str = "✔ Spending is under control. Keep it up!";

/// Suggestion for the category with the highest spend, if it has one
pub fn category_advice(category: Category) -> Option<&'static str> {
    match category {
        Category::Food => Some("You are spending the most on food. Try cooking more often!"),
        Category::Shopping => Some("Your shopping expenses are high. Try reducing impulse buys."),
        Category::Entertainment => {
            Some("Entertainment is taking a major share. Cut unused subscriptions.")
        }
        Category::Transport => {
            Some("Transport spending is high. Consider shared rides or public transport.")
        }
        Category::Utilities => {
            Some("Utility bills seem heavy. Review usage or switch cheaper plans.")
        }
        Category::Other => None,
    }
}

/// Build the suggestion list: one line for the top category, one for the projection
pub fn advise(highest_category: Category, predicted_monthly: f64) -> Vec<String> {
    let mut feedback = Vec::with_capacity(2);

    feedback.push(
        category_advice(highest_category)
            .unwrap_or(SPENDING_WISELY)
            .to_string(),
    );

    if predicted_monthly > MONTHLY_WARNING_THRESHOLD {
        feedback.push(OVER_THRESHOLD.to_string());
    } else {
        feedback.push(UNDER_CONTROL.to_string());
    }

    feedback
}

//! Console walk-through of an email field validated while typing and a
//! phone number field validated on submit

use textfield_validator::logging::{init_logging, LoggingConfig};
use textfield_validator::{
    Binding, LocalTaskScheduler, ValidationController, ValidationMode, ValidationRule,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_logging(LoggingConfig::development())?;

    println!("🦀 textfield-validator Demo");
    println!("===========================\n");

    demo_email_on_change();

    let local = tokio::task::LocalSet::new();
    local.run_until(demo_phone_on_demand()).await;

    println!("\n✅ Demo completed");
    Ok(())
}

fn demo_email_on_change() {
    println!("📝 Email (validated on every change)");
    println!("------------------------------------");

    let email = Binding::new(String::new());
    let is_valid_email = Binding::new(false);

    let _field = ValidationController::attach(
        email.clone(),
        is_valid_email.clone(),
        ValidationRule::Email,
        ValidationMode::OnChange,
        None,
    )
    .observe();

    let typed = "user@example.com";
    for end in [1, 5, 12, 14, typed.len()] {
        email.set(typed[..end].to_string());
        let label = if is_valid_email.get() {
            "valid email"
        } else {
            "Please enter valid email"
        };
        println!("  {:<18} -> {}", format!("'{}'", email.get()), label);
    }
}

async fn demo_phone_on_demand() {
    println!("\n📞 Phone number (validated on submit)");
    println!("-------------------------------------");

    let phone = Binding::new(String::new());
    let is_valid_phone = Binding::new(false);
    let submit = Binding::new(false);

    let field = ValidationController::with_scheduler(
        phone.clone(),
        is_valid_phone.clone(),
        ValidationRule::PhoneNumber,
        ValidationMode::OnDemand,
        Some(submit.clone()),
        LocalTaskScheduler::new(),
    )
    .observe();

    for input in ["555-0100", "5550100123"] {
        phone.set(input.to_string());
        println!("  typed '{}' (valid flag still {})", input, is_valid_phone.get());

        submit.set(true);
        println!("  submitted -> valid: {}", is_valid_phone.get());

        // Let the deferred trigger reset run
        tokio::task::yield_now().await;
        println!("  trigger after reset: {}", submit.get());
    }

    println!("  has been triggered: {}", field.has_been_triggered());
}

//! Name form walkthrough - one session through the form state
//!
//! Run with `cargo run --example name_form --features tracing` to see the
//! rule's debug events as well.

use exclusive_name::prelude::*;

fn show(form: &FormState<ExclusivePresence>) {
    for field in Field::ALL {
        let value = form
            .value(field)
            .map_or("<absent>".to_string(), |v| format!("{:?}", v));
        match form.visible_error(field) {
            Some(error) => println!("  {:<10} {:<12} ✗ {}", field, value, error),
            None => println!("  {:<10} {:<12}", field, value),
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Name Form ===\n");
    let mut form = FormState::new(ExclusivePresence::new());

    println!("Step 1: fresh form, nothing touched");
    show(&form);

    println!("\nStep 2: user tabs through firstName without typing");
    form.touch(Field::FirstName);
    show(&form);

    println!("\nStep 3: user fills in both fields and submits");
    form.set(Field::FirstName, Some("Ada".to_string()));
    form.set(Field::NickName, Some("ace".to_string()));
    if let Err(errors) = form.submit(|values| values.clone()) {
        println!("  rejected:\n{}", errors);
    }
    show(&form);

    println!("\nStep 4: user clears nickName and submits again");
    form.set(Field::NickName, None);
    match form.submit(|values| values.clone()) {
        Ok(values) => println!("  submitted: {:?}", values),
        Err(errors) => println!("  rejected:\n{}", errors),
    }
    show(&form);
}

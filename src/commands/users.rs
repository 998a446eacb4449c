use tabled::Tabled;

use crate::cli::{UserAddArgs, UserDeleteArgs, UserUpdateArgs};
use crate::client::UsersClient;
use crate::controller::FormController;
use crate::error::{Result, UsersError};
use crate::notify::{TermConfirmer, TermNotifier};
use crate::output;
use crate::types::User;

#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Age")]
    age: i64,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            age: user.age,
        }
    }
}

fn controller(client: UsersClient) -> FormController<TermNotifier, TermConfirmer> {
    FormController::new(client, TermNotifier, TermConfirmer::new(false))
}

pub async fn list(client: UsersClient) -> Result<()> {
    let mut controller = controller(client);
    controller.fetch_users().await;

    if controller.users().is_empty() {
        output::print_message("No users found");
        return Ok(());
    }

    output::print_table(controller.users(), |u| UserRow::from(u));

    Ok(())
}

pub async fn show(client: &UsersClient, id: i64) -> Result<()> {
    let user = client.get_user(id).await?;

    output::print_item(&user, |user| {
        println!("User {}", user.id);
        println!();
        println!("Name:  {}", user.name);
        println!("Email: {}", user.email);
        println!("Age:   {}", user.age);
    });

    Ok(())
}

pub async fn add(client: UsersClient, args: UserAddArgs) -> Result<()> {
    let mut controller = controller(client);

    // The duplicate-email check runs against the local mirror.
    controller.fetch_users().await;

    controller.set_name(args.name);
    controller.set_age(args.age);
    controller.on_email_input(&args.email);
    controller.create_user().await;

    Ok(())
}

pub async fn update(client: UsersClient, args: UserUpdateArgs) -> Result<()> {
    let mut controller = controller(client);
    controller.fetch_users().await;

    let user = controller
        .user(args.id)
        .cloned()
        .ok_or(UsersError::UserNotFound(args.id))?;
    controller.enter_edit_mode(&user);

    if let Some(name) = args.name {
        controller.set_name(name);
    }
    if let Some(age) = args.age {
        controller.set_age(age);
    }
    if let Some(email) = args.email {
        controller.on_email_input(&email);
    }

    controller.update_user(args.id).await
}

pub async fn delete(client: UsersClient, args: UserDeleteArgs) -> Result<()> {
    let mut controller =
        FormController::new(client, TermNotifier, TermConfirmer::new(args.yes));

    controller.delete_user(args.id).await;

    Ok(())
}

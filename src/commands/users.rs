use tracing::debug;

use crate::cli::{AddArgs, EditArgs};
use crate::client::Transport;
use crate::error::{Result, UserdeskError};
use crate::output;
use crate::page::{ClickEvent, Element};
use crate::router::{ActionTag, Region};
use crate::types::{RecordId, UserFields, UserRecord};
use crate::workflows::{App, Outcome};

fn submit_click() -> ClickEvent {
    ClickEvent::on(Region::Form, Element::new(ActionTag::Submit.class()))
}

fn row_click<T: Transport>(app: &App<T>, id: &RecordId, tag: ActionTag) -> Result<ClickEvent> {
    let target = app
        .page()
        .row_control(id, tag)
        .ok_or_else(|| UserdeskError::UserNotFound(id.clone()))?;
    Ok(ClickEvent::on(Region::TableBody, target))
}

pub async fn list<T: Transport>(app: &mut App<T>) -> Result<()> {
    app.load().await?;
    output::print_users(&app.page().table);
    Ok(())
}

pub async fn show<T: Transport>(app: &App<T>, id: &RecordId) -> Result<()> {
    let client = app.client();
    let user: UserRecord = client.get(client.member(id)?).await?;
    output::print_user(&user);
    Ok(())
}

pub async fn add<T: Transport>(app: &mut App<T>, args: AddArgs) -> Result<()> {
    app.load().await?;
    app.handle(&ClickEvent::on_root(Region::AddButton)).await?;
    app.page_mut().form = UserFields::new(args.name, args.lastname, args.phone);

    if let Outcome::Added(user) = app.handle(&submit_click()).await? {
        output::print_message(&format!("User {} has been added.", user.id));
    }
    output::print_users(&app.page().table);
    Ok(())
}

pub async fn edit<T: Transport>(app: &mut App<T>, args: EditArgs) -> Result<()> {
    app.load().await?;
    let event = row_click(app, &args.id, ActionTag::Edit)?;

    // Without the fetched record the form would be submitted with blank fields.
    let current = match app.handle(&event).await? {
        Outcome::Populated(user) => user,
        _ => return Ok(()),
    };
    debug!(id = %current.id, name = %current.name, lastname = %current.lastname, "editing user");

    let form = &mut app.page_mut().form;
    if let Some(name) = args.name {
        form.name = name;
    }
    if let Some(lastname) = args.lastname {
        form.lastname = lastname;
    }
    if let Some(phone) = args.phone {
        form.phone = phone;
    }

    if let Outcome::Updated(user) = app.handle(&submit_click()).await? {
        output::print_message(&format!("User {} has been updated.", user.id));
    }
    output::print_users(&app.page().table);
    Ok(())
}

pub async fn delete<T: Transport>(app: &mut App<T>, id: &RecordId) -> Result<()> {
    app.load().await?;
    let event = row_click(app, id, ActionTag::Delete)?;

    if let Outcome::Deleted(id) = app.handle(&event).await? {
        output::print_message(&format!("User {id} has been deleted."));
    }
    output::print_users(&app.page().table);
    Ok(())
}

pub async fn render<T: Transport>(app: &mut App<T>) -> Result<()> {
    app.load().await?;
    print!("{}", crate::render::body_markup(&app.page().table));
    Ok(())
}

#[cfg(test)]
mod tests {
    use reqwest::Method;
    use serde_json::json;

    use super::*;
    use crate::client::testing::{collection, FakeTransport};
    use crate::client::UsersClient;
    use crate::form::FormSession;
    use crate::workflows::FailurePolicy;

    fn app(transport: FakeTransport) -> App<FakeTransport> {
        App::new(UsersClient::new(transport, collection()), FailurePolicy::LogAndContinue)
    }

    fn one_user() -> serde_json::Value {
        json!([{"id": "42", "name": "Cy", "lastname": "Park", "phone": "555-0142"}])
    }

    fn edit_args(phone: Option<&str>) -> EditArgs {
        EditArgs {
            id: RecordId::new("42"),
            name: None,
            lastname: None,
            phone: phone.map(String::from),
        }
    }

    fn methods(app: &App<FakeTransport>) -> Vec<Method> {
        app.client()
            .transport()
            .requests()
            .iter()
            .map(|r| r.method.clone())
            .collect()
    }

    #[tokio::test]
    async fn test_edit_stops_when_fetch_fails() {
        let mut app = app(FakeTransport::new().reply(200, one_user()).fail());

        edit(&mut app, edit_args(Some("555-0199"))).await.unwrap();

        assert_eq!(methods(&app), vec![Method::GET, Method::GET]);
        assert_eq!(app.session(), &FormSession::Edit(RecordId::new("42")));
        assert_eq!(app.page().table.find(&RecordId::new("42")).unwrap().phone, "555-0142");
    }

    #[tokio::test]
    async fn test_edit_keeps_fields_that_were_not_given() {
        let transport = FakeTransport::new()
            .reply(200, one_user())
            .reply(200, json!({"id": "42", "name": "Cy", "lastname": "Park", "phone": "555-0142"}))
            .reply(200, json!({"id": "42", "name": "Cy", "lastname": "Park", "phone": "555-0199"}));
        let mut app = app(transport);

        edit(&mut app, edit_args(Some("555-0199"))).await.unwrap();

        let requests = app.client().transport().requests();
        assert_eq!(methods(&app), vec![Method::GET, Method::GET, Method::PUT]);
        assert_eq!(
            requests[2].body,
            Some(json!({"name": "Cy", "lastname": "Park", "phone": "555-0199"}))
        );
        assert_eq!(app.page().table.find(&RecordId::new("42")).unwrap().phone, "555-0199");
        assert_eq!(app.session(), &FormSession::Idle);
    }

    #[tokio::test]
    async fn test_edit_unknown_row_is_not_found() {
        let mut app = app(FakeTransport::new().reply(200, one_user()));

        let mut args = edit_args(None);
        args.id = RecordId::new("7");
        let result = edit(&mut app, args).await;

        assert!(matches!(result, Err(UserdeskError::UserNotFound(_))));
        assert_eq!(methods(&app), vec![Method::GET]);
    }

    #[tokio::test]
    async fn test_add_with_empty_field_sends_nothing() {
        let mut app = app(FakeTransport::new().reply(200, one_user()));
        let args = AddArgs {
            name: "Ann".to_string(),
            lastname: String::new(),
            phone: "555-0100".to_string(),
        };

        add(&mut app, args).await.unwrap();

        assert_eq!(methods(&app), vec![Method::GET]);
        assert_eq!(app.page().table.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_removes_clicked_row() {
        let transport = FakeTransport::new().reply(200, one_user()).reply_text(200, "{}");
        let mut app = app(transport);

        delete(&mut app, &RecordId::new("42")).await.unwrap();

        assert_eq!(methods(&app), vec![Method::GET, Method::DELETE]);
        assert!(app.page().table.is_empty());
    }
}

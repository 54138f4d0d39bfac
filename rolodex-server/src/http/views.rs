//! Server-rendered pages
//!
//! Pages are plain Rust functions returning HTML strings; no templating
//! crate. All user-supplied text goes through escape() before landing in
//! markup or attribute values.

use crate::db::User;

/// Escape text for safe inclusion in HTML bodies and attribute values.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Shared page shell: head, stylesheet link, body wrapper.
fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <link rel="stylesheet" href="/static/style.css">
</head>
<body>
  <div class="container">
{body}
  </div>
</body>
</html>
"#,
        title = escape(title),
        body = body,
    )
}

/// The record list page: one table row per user with edit/delete links.
pub fn record_list(users: &[User]) -> String {
    let mut rows = String::new();
    for user in users {
        rows.push_str(&format!(
            r#"      <tr>
        <td>{name}</td>
        <td>{email}</td>
        <td>
          <a class="btn" href="/edit/{id}">Edit</a>
          <a class="btn btn-danger" href="/delete/{id}">Delete</a>
        </td>
      </tr>
"#,
            name = escape(&user.name),
            email = escape(&user.email),
            id = user.id,
        ));
    }

    let body = format!(
        r#"    <h1>Record List</h1>
    <a class="btn" href="/add">Add New Record</a>
    <table>
      <thead>
        <tr><th>Name</th><th>Email</th><th>Actions</th></tr>
      </thead>
      <tbody>
{rows}      </tbody>
    </table>"#,
    );

    page("Record List", &body)
}

/// The add-record form. Posts urlencoded name/email to /create.
pub fn add_form() -> String {
    let body = r#"    <h1>Add New Record</h1>
    <form action="/create" method="post">
      <label for="name">Name</label>
      <input type="text" id="name" name="name">
      <label for="email">Email</label>
      <input type="email" id="email" name="email">
      <button type="submit">Add Record</button>
    </form>
    <a href="/">Back to Record List</a>"#;

    page("Add Record", body)
}

/// The edit-record form, pre-filled from the fetched user. The id rides
/// along as a hidden field; the form posts urlencoded to /update.
pub fn edit_form(user: &User) -> String {
    let body = format!(
        r#"    <h1>Edit Record</h1>
    <form action="/update" method="post">
      <input type="hidden" name="id" value="{id}">
      <label for="name">Name</label>
      <input type="text" id="name" name="name" value="{name}">
      <label for="email">Email</label>
      <input type="email" id="email" name="email" value="{email}">
      <button type="submit">Update Record</button>
    </form>
    <a href="/">Back to Record List</a>"#,
        id = user.id,
        name = escape(&user.name),
        email = escape(&user.email),
    );

    page("Edit Record", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 7,
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        }
    }

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(
            escape(r#"<b>"a" & 'b'</b>"#),
            "&lt;b&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/b&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn record_list_renders_rows_and_links() {
        let html = record_list(&[sample_user()]);
        assert!(html.contains("Ada Lovelace"));
        assert!(html.contains("ada@example.com"));
        assert!(html.contains(r#"href="/edit/7""#));
        assert!(html.contains(r#"href="/delete/7""#));
        assert!(html.contains(r#"href="/add""#));
    }

    #[test]
    fn record_list_escapes_user_text() {
        let user = User {
            id: 1,
            name: "<script>alert(1)</script>".to_string(),
            email: "x@example.com".to_string(),
        };
        let html = record_list(&[user]);
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn add_form_posts_to_create() {
        let html = add_form();
        assert!(html.contains(r#"action="/create""#));
        assert!(html.contains(r#"name="name""#));
        assert!(html.contains(r#"name="email""#));
    }

    #[test]
    fn edit_form_prefills_and_carries_id() {
        let html = edit_form(&sample_user());
        assert!(html.contains(r#"action="/update""#));
        assert!(html.contains(r#"type="hidden" name="id" value="7""#));
        assert!(html.contains(r#"value="Ada Lovelace""#));
        assert!(html.contains(r#"value="ada@example.com""#));
    }

    #[test]
    fn edit_form_escapes_attribute_values() {
        let user = User {
            id: 2,
            name: r#"" onmouseover="x"#.to_string(),
            email: "y@example.com".to_string(),
        };
        let html = edit_form(&user);
        assert!(html.contains("&quot; onmouseover=&quot;x"));
    }
}

//! List recent notifications with an API key.
//!
//! Users can create an API key in Workestra; alternatively `login` obtains
//! one from an email/password pair.

use workestra::Client;

fn main() {
    tracing_subscriber::fmt::init();

    let mut client = Client::new();
    client.set_api_key("{YOUR-API-KEY}");
    // or: client.login("{YOUR-EMAIL}", "{YOUR-PASSWORD}");

    let response = client.list_notifications();
    if response.is_error() {
        eprintln!(
            "request failed (status {}): {:?}",
            response.status(),
            response.error_message()
        );
        return;
    }

    println!("{:#?}", response.content_json());
}

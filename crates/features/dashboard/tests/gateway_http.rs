pub mod fixtures;

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use fmdash_dashboard::{
        ConfigGateway, ConfigTransport, GatewayError, HttpTransport, defaults, validator,
    };
    use fmdash_domain::config::GatewayConfig;
    use fmdash_domain::{ConfigurationDocument, Item};
    use serde_json::json;

    fn gateway(backend: &Backend) -> ConfigGateway<HttpTransport> {
        ConfigGateway::new(HttpTransport::new(&backend.gateway_config()).unwrap())
    }

    #[tokio::test]
    async fn fetches_remote_document() {
        let backend = spawn_backend(remote_document()).await;
        let doc = gateway(&backend).get_dashboard_config().await;

        let expected: ConfigurationDocument = serde_json::from_value(remote_document()).unwrap();
        assert_eq!(doc, expected);
        assert_eq!(backend.requests(), ["GET /dashboard/configuration"]);
    }

    #[tokio::test]
    async fn writes_reach_the_backend() {
        let backend = spawn_backend(remote_document()).await;
        let gateway = gateway(&backend);

        let items = vec![Item::hidden("statusOverview")];
        assert!(gateway.update_section_config("amc", &items).await);
        assert_eq!(backend.document()["sections"][0]["items"], json!([
            { "name": "statusOverview", "isVisible": false }
        ]));

        assert!(gateway.save_dashboard_config(&ConfigurationDocument::default()).await);
        assert_eq!(backend.document(), json!({ "sections": [] }));

        let reset = gateway.reset_to_default_config().await;
        assert_eq!(reset, defaults::default_configuration());

        assert_eq!(backend.requests(), [
            "PATCH /dashboard/configuration/section/amc",
            "POST /dashboard/configuration",
            "POST /dashboard/configuration/reset",
        ]);
    }

    #[tokio::test]
    async fn section_names_are_encoded() {
        let backend = spawn_backend(remote_document()).await;
        let gateway = gateway(&backend);

        assert!(gateway.update_section_config("meeting rooms", &[]).await);
        assert_eq!(backend.requests(), ["PATCH /dashboard/configuration/section/meeting rooms"]);
    }

    #[tokio::test]
    async fn server_errors_degrade_gracefully() {
        let backend = spawn_backend(remote_document()).await;
        backend.set_mode(Mode::ServerError);
        let gateway = gateway(&backend);

        assert!(matches!(gateway.transport().fetch().await, Err(GatewayError::Status { .. })));
        assert_eq!(gateway.get_dashboard_config().await, defaults::default_configuration());
        assert_eq!(gateway.reset_to_default_config().await, defaults::default_configuration());
        assert!(!gateway.save_dashboard_config(defaults::default_document()).await);
        assert!(!gateway.update_section_config("amc", &[]).await);
    }

    #[tokio::test]
    async fn garbage_bodies_degrade_gracefully() {
        let backend = spawn_backend(remote_document()).await;
        backend.set_mode(Mode::Garbage);
        let gateway = gateway(&backend);

        assert!(matches!(gateway.transport().fetch().await, Err(GatewayError::Decode { .. })));
        let doc = gateway.get_dashboard_config().await;
        assert!(validator::validate_document(&doc));
        assert_eq!(doc, defaults::default_configuration());
    }

    #[tokio::test]
    async fn refusals_are_reported_as_false() {
        let backend = spawn_backend(remote_document()).await;
        backend.set_mode(Mode::Refuse);
        let gateway = gateway(&backend);

        assert!(!gateway.save_dashboard_config(defaults::default_document()).await);
        assert_eq!(gateway.get_dashboard_config().await, defaults::default_configuration());
    }

    #[tokio::test]
    async fn invalid_remote_payload_is_not_trusted() {
        let backend =
            spawn_backend(json!({ "sections": [{ "name": "x", "items": [{ "name": "a" }] }] }))
                .await;
        let doc = gateway(&backend).get_dashboard_config().await;
        assert_eq!(doc, defaults::default_configuration());
    }

    #[tokio::test]
    async fn unreachable_service_falls_back() {
        let config = GatewayConfig {
            base_url: "http://127.0.0.1:1/api".to_owned(),
            timeout_seconds: 2,
            ..GatewayConfig::default()
        };
        let gateway = ConfigGateway::new(HttpTransport::new(&config).unwrap());

        assert!(matches!(gateway.transport().fetch().await, Err(GatewayError::Transport { .. })));
        assert_eq!(gateway.get_dashboard_config().await, defaults::default_configuration());
        assert!(!gateway.update_section_config("amc", &[]).await);
    }
}

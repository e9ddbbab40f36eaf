#[cfg(test)]
mod tests {
    use artstudio::app::agents::{
        parse_agents, serialize_agents, Agent, AgentRegistry, DEFAULT_AGENTS_YAML,
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_yaml_parses_to_three_agents() {
        let agents = parse_agents(DEFAULT_AGENTS_YAML).unwrap();
        assert_eq!(agents.len(), 3);
        assert_eq!(agents[0].id, "writer");
        assert_eq!(agents[1].id, "coder");
        assert_eq!(agents[2].id, "analyst");
        assert_eq!(agents[1].model, "gemini-3-pro-preview");
    }

    #[test]
    fn test_parse_rejects_non_sequence_documents() {
        assert!(parse_agents("just a string").is_err());
        assert!(parse_agents("key: value").is_err());
        assert!(parse_agents("").is_err());
    }

    #[test]
    fn test_parse_accepts_empty_sequence() {
        let agents = parse_agents("[]").unwrap();
        assert!(agents.is_empty());
    }

    #[test]
    fn test_serialization_round_trips() {
        let agents = parse_agents(DEFAULT_AGENTS_YAML).unwrap();
        let yaml = serialize_agents(&agents).unwrap();
        let back = parse_agents(&yaml).unwrap();
        assert_eq!(agents, back);
    }

    #[test]
    fn test_system_prompt_field_uses_camel_case_in_yaml() {
        let agents = vec![Agent {
            id: "a".to_string(),
            name: "A".to_string(),
            description: "d".to_string(),
            model: "gemini-3-flash-preview".to_string(),
            system_prompt: "be brief".to_string(),
            avatar: None,
        }];
        let yaml = serialize_agents(&agents).unwrap();
        assert!(yaml.contains("systemPrompt"), "yaml was: {}", yaml);
        assert!(!yaml.contains("system_prompt"));
        assert!(!yaml.contains("avatar"));
    }

    #[test]
    fn test_registry_defaults_select_first_agent() {
        let registry = AgentRegistry::with_defaults();
        assert_eq!(registry.agents().len(), 3);
        assert_eq!(registry.selected_id(), Some("writer"));
        assert!(registry.parse_error().is_none());
    }

    #[test]
    fn test_invalid_source_keeps_previous_collection() {
        let mut registry = AgentRegistry::with_defaults();
        registry.select("coder");

        registry.set_source("{{{ not yaml".to_string());

        assert!(registry.parse_error().is_some());
        assert_eq!(registry.agents().len(), 3);
        assert_eq!(registry.selected_id(), Some("coder"));
        // The broken text stays visible for the user to fix.
        assert_eq!(registry.source_text(), "{{{ not yaml");
    }

    #[test]
    fn test_valid_source_replaces_collection_and_clears_error() {
        let mut registry = AgentRegistry::with_defaults();
        registry.set_source("{{{ not yaml".to_string());
        assert!(registry.parse_error().is_some());

        let replacement = r#"- id: "poet"
  name: "Poet"
  description: "Writes verse."
  model: "gemini-3-flash-preview"
  systemPrompt: "You are a poet."
"#;
        registry.set_source(replacement.to_string());

        assert!(registry.parse_error().is_none());
        assert_eq!(registry.agents().len(), 1);
        // The previous selection vanished, so the first agent takes over.
        assert_eq!(registry.selected_id(), Some("poet"));
    }

    #[test]
    fn test_selection_survives_reparse_when_id_still_exists() {
        let mut registry = AgentRegistry::with_defaults();
        registry.select("analyst");

        registry.set_source(DEFAULT_AGENTS_YAML.to_string());

        assert_eq!(registry.selected_id(), Some("analyst"));
    }

    #[test]
    fn test_select_unknown_id_is_ignored() {
        let mut registry = AgentRegistry::with_defaults();
        registry.select("nope");
        assert_eq!(registry.selected_id(), Some("writer"));
    }

    #[test]
    fn test_empty_collection_has_no_selection() {
        let mut registry = AgentRegistry::with_defaults();
        registry.set_source("[]".to_string());
        assert!(registry.agents().is_empty());
        assert!(registry.selected().is_none());
    }

    #[test]
    fn test_export_yaml_round_trips_live_collection() {
        let registry = AgentRegistry::with_defaults();
        let yaml = registry.export_yaml().unwrap();
        let agents = parse_agents(&yaml).unwrap();
        assert_eq!(agents, registry.agents());
    }

    #[test]
    fn test_avatar_field_is_optional() {
        let yaml = r#"- id: "x"
  name: "X"
  description: "d"
  model: "m"
  systemPrompt: "p"
  avatar: "🎨"
"#;
        let agents = parse_agents(yaml).unwrap();
        assert_eq!(agents[0].avatar.as_deref(), Some("🎨"));
    }
}

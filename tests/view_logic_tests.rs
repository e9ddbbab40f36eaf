#[cfg(test)]
mod tests {
    use artstudio::app::agents::AgentRegistry;
    use artstudio::app::gemini_client::GeminiClient;
    use artstudio::app::gemini_client::GatewayError;
    use artstudio::app::studioui::agent_studio_view::{
        build_run_request, compose_system_instruction, AgentStudioView, REPAIR_ERROR_TEXT,
        RUN_ERROR_TEXT,
    };
    use artstudio::app::studioui::app::ActiveView;
    use artstudio::app::studioui::dashboard_view::{METRICS, MODEL_SHARES, USAGE_SERIES};
    use artstudio::app::studioui::doc_intelligence_view::{
        build_doc_request, load_file, FileContent, DEFAULT_INSTRUCTION, DIRECT_MODELS,
        VISION_MODEL,
    };
    use artstudio::app::studioui::note_keeper_view::{
        chat_request, ChatRole, NoteKeeperView, NoteTransform, CHAT_ERROR_TEXT, NOTE_MODEL,
    };
    use artstudio::app::studioui::ViewStatus;
    use std::io::Write;
    use std::time::{Duration, Instant};

    #[test]
    fn test_view_status_defaults_to_idle() {
        assert_eq!(ViewStatus::default(), ViewStatus::Idle);
        assert!(ViewStatus::Loading.is_loading());
        assert!(!ViewStatus::Error("x".to_string()).is_loading());
    }

    #[test]
    fn test_active_view_key_round_trip() {
        for view in [
            ActiveView::Dashboard,
            ActiveView::AgentStudio,
            ActiveView::DocIntelligence,
            ActiveView::NoteKeeper,
        ] {
            assert_eq!(ActiveView::from_key(view.key()), view);
        }
    }

    #[test]
    fn test_unknown_view_key_lands_on_dashboard() {
        assert_eq!(ActiveView::from_key("garbage"), ActiveView::Dashboard);
        assert_eq!(ActiveView::from_key(""), ActiveView::Dashboard);
    }

    // Agent Studio

    #[test]
    fn test_system_instruction_without_skill_note() {
        let composed = compose_system_instruction("You are a poet.", "   ");
        assert_eq!(composed, "You are a poet.");
    }

    #[test]
    fn test_system_instruction_appends_skill_note() {
        let composed = compose_system_instruction("You are a poet.", "Rhyme everything.");
        assert_eq!(
            composed,
            "You are a poet.\n\nGlobal Skills/Context:\nRhyme everything."
        );
    }

    #[test]
    fn test_run_request_uses_agent_model_and_prompt() {
        let registry = AgentRegistry::with_defaults();
        let agent = registry.selected().unwrap();

        let request = build_run_request(agent, "write a haiku", "keep it short");

        assert_eq!(request.model, agent.model);
        assert_eq!(request.prompt, "write a haiku");
        let system = request.system_instruction.unwrap();
        assert!(system.starts_with(&agent.system_prompt));
        assert!(system.contains("Global Skills/Context:"));
        assert!(request.inline_data.is_none());
    }

    #[test]
    fn test_run_requires_prompt_and_agent() {
        let registry = AgentRegistry::with_defaults();
        let mut view = AgentStudioView::new();

        assert!(!view.can_run(&registry));
        view.prompt = "   ".to_string();
        assert!(!view.can_run(&registry));
        view.prompt = "hello".to_string();
        assert!(view.can_run(&registry));

        let mut empty = AgentRegistry::with_defaults();
        empty.set_source("[]".to_string());
        assert!(!view.can_run(&empty));
    }

    #[test]
    fn test_failed_run_shows_fixed_error_text() {
        let client = GeminiClient::with_key(None);
        let mut registry = AgentRegistry::with_defaults();
        let mut view = AgentStudioView::new();
        view.prompt = "hello".to_string();

        view.start_run(&client, &registry);
        assert!(view.status.is_loading());

        let deadline = Instant::now() + Duration::from_secs(5);
        while view.has_pending_work() {
            assert!(Instant::now() < deadline, "worker never answered");
            view.poll(&mut registry);
            std::thread::sleep(Duration::from_millis(10));
        }

        assert_eq!(view.output, RUN_ERROR_TEXT);
        assert!(matches!(view.status, ViewStatus::Error(_)));
    }

    #[test]
    fn test_failed_upload_triggers_single_automatic_repair() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("agents.yaml");
        std::fs::write(&path, "{{{ not yaml").unwrap();

        let client = GeminiClient::with_key(None);
        let mut registry = AgentRegistry::with_defaults();
        let mut view = AgentStudioView::new();
        view.import_path = path.display().to_string();

        view.import_agents(&client, &mut registry);

        // The broken upload is visible but the collection survives, and an
        // automatic repair is already in flight.
        assert_eq!(registry.source_text(), "{{{ not yaml");
        assert!(registry.parse_error().is_some());
        assert_eq!(registry.agents().len(), 3);
        assert!(view.has_pending_work());
        assert!(view.repair_status.is_loading());

        let deadline = Instant::now() + Duration::from_secs(5);
        while view.has_pending_work() {
            assert!(Instant::now() < deadline, "worker never answered");
            view.poll(&mut registry);
            std::thread::sleep(Duration::from_millis(10));
        }

        // The keyless repair fails terminally: error state, no retry.
        assert_eq!(
            view.repair_status,
            ViewStatus::Error(REPAIR_ERROR_TEXT.to_string())
        );
        assert!(!view.has_pending_work());
        view.poll(&mut registry);
        assert!(!view.has_pending_work());
        assert_eq!(registry.agents().len(), 3);
    }

    #[test]
    fn test_import_of_unreadable_path_does_not_start_a_repair() {
        let dir = tempfile::tempdir().unwrap();
        let client = GeminiClient::with_key(None);
        let mut registry = AgentRegistry::with_defaults();
        let mut view = AgentStudioView::new();
        view.import_path = dir.path().join("missing.yaml").display().to_string();

        view.import_agents(&client, &mut registry);

        assert!(view.file_notice.is_some());
        assert!(!view.has_pending_work());
        assert!(registry.parse_error().is_none());
    }

    #[test]
    fn test_successful_repair_replaces_editable_text() {
        let mut registry = AgentRegistry::with_defaults();
        registry.set_source("{{{ not yaml".to_string());
        let mut view = AgentStudioView::new();

        let repaired = r#"- id: "poet"
  name: "Poet"
  description: "Writes verse."
  model: "gemini-3-flash-preview"
  systemPrompt: "You are a poet."
"#;
        view.apply_repair_result(&mut registry, Ok(repaired.to_string()));

        assert_eq!(view.repair_status, ViewStatus::Idle);
        assert_eq!(registry.source_text(), repaired);
        assert!(registry.parse_error().is_none());
        assert_eq!(registry.agents().len(), 1);
    }

    #[test]
    fn test_repair_that_still_fails_to_parse_is_terminal() {
        let mut registry = AgentRegistry::with_defaults();
        registry.set_source("{{{ not yaml".to_string());
        let mut view = AgentStudioView::new();

        view.apply_repair_result(&mut registry, Ok("]]] still broken".to_string()));

        assert!(matches!(view.repair_status, ViewStatus::Error(_)));
        assert!(!view.has_pending_work());
        // The failed repair text stays visible; the collection survives.
        assert_eq!(registry.source_text(), "]]] still broken");
        assert_eq!(registry.agents().len(), 3);
    }

    #[test]
    fn test_repair_gateway_error_is_terminal() {
        let mut registry = AgentRegistry::with_defaults();
        let mut view = AgentStudioView::new();

        view.apply_repair_result(&mut registry, Err(GatewayError::MissingApiKey));

        assert_eq!(
            view.repair_status,
            ViewStatus::Error(REPAIR_ERROR_TEXT.to_string())
        );
        assert!(!view.has_pending_work());
    }

    #[test]
    fn test_start_repair_is_not_reentered_while_loading() {
        let client = GeminiClient::with_key(None);
        let registry = AgentRegistry::with_defaults();
        let mut view = AgentStudioView::new();

        // A repair already marked in flight must not spawn another worker.
        view.repair_status = ViewStatus::Loading;
        view.start_repair(&client, &registry, false);
        assert!(!view.has_pending_work());
    }

    // Dashboard

    #[test]
    fn test_usage_series_matches_sample_dataset() {
        let days: Vec<&str> = USAGE_SERIES.iter().map(|(day, _, _)| *day).collect();
        assert_eq!(days, ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
        assert_eq!(USAGE_SERIES[0], ("Mon", 120, 280));

        // Mobile and desktop splits add up to the daily totals.
        let totals: Vec<u32> = USAGE_SERIES.iter().map(|(_, m, d)| m + d).collect();
        assert_eq!(totals, [400, 300, 300, 200, 278, 189, 239]);
    }

    #[test]
    fn test_model_shares_cover_everything() {
        let total: u32 = MODEL_SHARES.iter().map(|(_, share)| share).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_metric_cards_are_static() {
        assert_eq!(METRICS[0], ("total_runs", "12,453"));
        assert_eq!(METRICS[1], ("active_agents", "8"));
        assert_eq!(METRICS[2], ("latency", "42ms"));
    }

    // Doc Intelligence

    #[test]
    fn test_text_source_is_appended_to_instruction() {
        let source = FileContent::Text("line one\nline two".to_string());
        let request =
            build_doc_request(DEFAULT_INSTRUCTION, &source, DIRECT_MODELS[0], None, true);

        assert_eq!(request.model, DIRECT_MODELS[0]);
        assert_eq!(
            request.prompt,
            format!("{}\n\nContent:\nline one\nline two", DEFAULT_INSTRUCTION)
        );
        assert!(request.inline_data.is_none());
    }

    #[test]
    fn test_image_source_forces_vision_model_in_direct_mode() {
        let source = FileContent::Binary {
            mime_type: "image/png".to_string(),
            data: "aGVsbG8=".to_string(),
        };
        let request =
            build_doc_request(DEFAULT_INSTRUCTION, &source, "gemini-3-pro-preview", None, true);

        assert_eq!(request.model, VISION_MODEL);
        let inline = request.inline_data.unwrap();
        assert_eq!(inline.mime_type, "image/png");
    }

    #[test]
    fn test_image_source_keeps_agent_model_in_agent_mode() {
        let source = FileContent::Binary {
            mime_type: "image/png".to_string(),
            data: "aGVsbG8=".to_string(),
        };
        let request = build_doc_request(
            DEFAULT_INSTRUCTION,
            &source,
            "gemini-3-pro-preview",
            Some("You are an analyst.".to_string()),
            false,
        );

        assert_eq!(request.model, "gemini-3-pro-preview");
        assert_eq!(
            request.system_instruction.as_deref(),
            Some("You are an analyst.")
        );
    }

    #[test]
    fn test_pdf_source_does_not_force_vision_model() {
        let source = FileContent::Binary {
            mime_type: "application/pdf".to_string(),
            data: "aGVsbG8=".to_string(),
        };
        let request =
            build_doc_request(DEFAULT_INSTRUCTION, &source, "gemini-3-pro-preview", None, true);
        assert_eq!(request.model, "gemini-3-pro-preview");
    }

    #[test]
    fn test_load_file_reads_text_files_as_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.md");
        std::fs::write(&path, "# hi\n").unwrap();

        let file = load_file(&path).unwrap();
        assert_eq!(file.name, "notes.md");
        assert_eq!(file.content, FileContent::Text("# hi\n".to_string()));
    }

    #[test]
    fn test_load_file_encodes_images_as_base64() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pic.png");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(&[0x89, 0x50, 0x4e, 0x47]).unwrap();
        drop(f);

        let file = load_file(&path).unwrap();
        match file.content {
            FileContent::Binary { mime_type, data } => {
                assert_eq!(mime_type, "image/png");
                assert_eq!(data, "iVBORw==");
            }
            FileContent::Text(_) => panic!("png read as text"),
        }
        assert_eq!(file.size, 4);
    }

    #[test]
    fn test_load_file_missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_file(&dir.path().join("nope.txt")).is_err());
    }

    // Note Keeper

    #[test]
    fn test_format_transform_replaces_document() {
        let transform = NoteTransform::Format;
        let request = transform.request("messy text");

        assert_eq!(request.model, NOTE_MODEL);
        assert!(request.prompt.contains("clean, structured Markdown"));
        assert!(request.prompt.ends_with("messy text"));

        let mut document = "messy text".to_string();
        transform.apply(&mut document, "# Clean");
        assert_eq!(document, "# Clean");
    }

    #[test]
    fn test_keywords_transform_includes_list_and_replaces() {
        let transform = NoteTransform::Keywords {
            list: "rust, egui".to_string(),
        };
        let request = transform.request("doc");
        assert!(request.prompt.contains("[rust, egui]"));
        assert!(request.prompt.contains("**BOLD**"));

        let mut document = "doc".to_string();
        transform.apply(&mut document, "**RUST** doc");
        assert_eq!(document, "**RUST** doc");
    }

    #[test]
    fn test_appending_transforms_keep_the_document() {
        for transform in [
            NoteTransform::Entities,
            NoteTransform::MindMap,
            NoteTransform::Socratic,
        ] {
            let mut document = "original".to_string();
            transform.apply(&mut document, "extra");
            assert_eq!(document, "original\n\nextra");
        }
    }

    #[test]
    fn test_summary_transform_appends_under_heading() {
        let transform = NoteTransform::Summary {
            prompt: "Summarize the key points.".to_string(),
        };
        let request = transform.request("body");
        assert!(request.prompt.starts_with("Summarize the key points."));
        assert!(request.prompt.contains("Text:\nbody"));
        assert_eq!(request.system_instruction.as_deref(), Some("You are a summarizer."));

        let mut document = "body".to_string();
        transform.apply(&mut document, "short version");
        assert_eq!(document, "body\n\n### Summary\nshort version");
    }

    #[test]
    fn test_mindmap_request_asks_for_mermaid() {
        let request = NoteTransform::MindMap.request("doc");
        assert!(request.prompt.contains("Mermaid.js Mindmap"));
    }

    #[test]
    fn test_chat_request_grounds_question_in_document() {
        let request = chat_request("my notes", "what is this?");
        assert_eq!(request.model, NOTE_MODEL);
        assert_eq!(request.prompt, "Context:\nmy notes\n\nQuestion: what is this?");
        assert!(request
            .system_instruction
            .unwrap()
            .contains("based on the provided notes"));
    }

    #[test]
    fn test_failed_chat_records_error_turn() {
        let client = GeminiClient::with_key(None);
        let mut view = NoteKeeperView::new();
        view.chat_input = "hello?".to_string();

        view.send_chat(&client);
        assert!(view.chat_input.is_empty());
        assert_eq!(view.chat_history.len(), 1);
        assert_eq!(view.chat_history[0].role, ChatRole::User);

        let deadline = Instant::now() + Duration::from_secs(5);
        while view.has_pending_work() {
            assert!(Instant::now() < deadline, "worker never answered");
            view.poll();
            std::thread::sleep(Duration::from_millis(10));
        }

        assert_eq!(view.chat_history.len(), 2);
        assert_eq!(view.chat_history[1].role, ChatRole::Assistant);
        assert_eq!(view.chat_history[1].text, CHAT_ERROR_TEXT);
    }

    #[test]
    fn test_blank_chat_input_is_not_sent() {
        let client = GeminiClient::with_key(None);
        let mut view = NoteKeeperView::new();
        view.chat_input = "   ".to_string();
        view.send_chat(&client);
        assert!(view.chat_history.is_empty());
        assert!(!view.has_pending_work());
    }
}

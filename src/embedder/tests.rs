use super::*;
use crate::segmenter::Paragraph;

#[test]
fn test_batching_small() {
    let batcher = Batcher::new(3);
    let items = vec![
        "para1".to_string(),
        "para2".to_string(),
        "para3".to_string(),
        "para4".to_string(),
        "para5".to_string(),
    ];

    let batches = batcher.split(&items);
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[0].len(), 3);
    assert_eq!(batches[1].len(), 2);
    assert_eq!(batches[1][0], "para4");
}

#[test]
fn test_batch_count() {
    let batcher = Batcher::new(32);
    assert_eq!(batcher.batch_count(0), 0);
    assert_eq!(batcher.batch_count(32), 1);
    assert_eq!(batcher.batch_count(33), 2);
}

#[test]
fn test_batching_empty() {
    let batcher = Batcher::new(100);
    let items: Vec<String> = vec![];

    let batches = batcher.split(&items);
    assert_eq!(batches.len(), 0);
}

#[test]
fn test_batching_zero_size_does_not_panic() {
    let batcher = Batcher::new(0);
    let items = vec!["a".to_string(); 3];
    assert_eq!(batcher.split(&items).len(), 3);
}

#[test]
fn test_model_info_default() {
    let model = EmbeddingModelInfo::default();
    assert_eq!(model.name, "google/embeddinggemma-300m");
    assert_eq!(model.dim, 768);
    assert_eq!(model.max_batch, 32);
}

#[test]
fn test_model_dimension_check() {
    let model = EmbeddingModelInfo::new("tiny", 2, 8);
    assert!(model.check_dimension(0, &[0.6, 0.8]).is_ok());
    assert!(matches!(
        model.check_dimension(4, &[1.0]),
        Err(EmbedError::DimensionMismatch {
            index: 4,
            expected: 2,
            found: 1
        })
    ));
}

#[test]
fn test_request_wire_format() {
    let texts = vec!["a".to_string(), "b".to_string()];
    let json = serde_json::to_string(&EmbeddingRequest { texts: &texts }).unwrap();
    assert_eq!(json, r#"{"texts":["a","b"]}"#);

    let response: EmbeddingResponse =
        serde_json::from_str(r#"{"embeddings":[[1.0,0.0],[0.0,1.0]]}"#).unwrap();
    assert_eq!(response.embeddings, vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
}

#[test]
fn test_normalize_in_place() {
    let mut v = vec![3.0, 4.0];
    assert!(normalize_in_place(&mut v));
    assert!((v[0] - 0.6).abs() < 1e-6);
    assert!((v[1] - 0.8).abs() < 1e-6);

    let mut zero = vec![0.0, 0.0];
    assert!(!normalize_in_place(&mut zero));
    assert_eq!(zero, vec![0.0, 0.0]);
}

#[test]
fn test_validate_embeddings() {
    assert!(validate_embeddings(0, &[]).is_ok());
    assert!(validate_embeddings(2, &[vec![1.0], vec![0.5]]).is_ok());

    let err = validate_embeddings(3, &[vec![1.0]]).unwrap_err();
    assert!(matches!(
        err,
        EmbedError::CountMismatch {
            expected: 3,
            found: 1
        }
    ));

    let err = validate_embeddings(2, &[vec![1.0, 0.0], vec![1.0]]).unwrap_err();
    assert!(matches!(
        err,
        EmbedError::DimensionMismatch {
            index: 1,
            expected: 2,
            found: 1
        }
    ));
}

#[test]
fn test_embed_paragraphs_prefixes_code() {
    let paragraphs = vec![
        Paragraph::text(0, "Prose"),
        Paragraph::code(1, "```\nx\n```"),
    ];
    let provider = |texts: &[String]| -> Result<Vec<Vec<f32>>, EmbedError> {
        assert_eq!(texts[0], "Prose");
        assert_eq!(texts[1], "Code:\n```\nx\n```");
        Ok(vec![vec![1.0, 0.0]; texts.len()])
    };

    let embeddings = embed_paragraphs(&provider, &paragraphs).unwrap();
    assert_eq!(embeddings.len(), 2);
    // Stored text is untouched
    assert_eq!(paragraphs[1].text, "```\nx\n```");
}

#[test]
fn test_embed_paragraphs_rejects_short_response() {
    let paragraphs = vec![Paragraph::text(0, "a"), Paragraph::text(1, "b")];
    let provider =
        |_: &[String]| -> Result<Vec<Vec<f32>>, EmbedError> { Ok(vec![vec![1.0, 0.0]]) };

    let err = embed_paragraphs(&provider, &paragraphs).unwrap_err();
    assert!(matches!(err, EmbedError::CountMismatch { .. }));
}

#[test]
fn test_embed_paragraphs_empty_skips_provider() {
    let provider = |_: &[String]| -> Result<Vec<Vec<f32>>, EmbedError> {
        panic!("provider should not be called for empty input")
    };
    assert!(embed_paragraphs(&provider, &[]).unwrap().is_empty());
}

#[test]
fn test_client_empty_input() {
    let client = HttpEmbeddingClient::new("http://localhost:18115");
    let result = client.embed(&[]);
    assert!(result.is_ok());
    assert_eq!(result.unwrap().len(), 0);
}

#[test]
fn test_client_with_model() {
    let client = HttpEmbeddingClient::new("http://localhost:18115/")
        .with_model(EmbeddingModelInfo::new("all-minilm", 384, 64));
    assert_eq!(client.model().dim, 384);
    assert_eq!(client.endpoint(), "http://localhost:18115/");
}

#[test]
fn test_client_unreachable_server() {
    let client = HttpEmbeddingClient::new("http://127.0.0.1:1");
    let err = client.embed(&["hello".to_string()]).unwrap_err();
    assert!(matches!(err, EmbedError::Request(_)));
}

// Integration test - requires the embedding server running
#[test]
#[ignore]
fn test_client_round_trip() {
    let client = HttpEmbeddingClient::new("http://localhost:18115");
    let texts = vec![
        "This is a test sentence.".to_string(),
        "Another test sentence here.".to_string(),
    ];

    let embeddings = client.embed(&texts).unwrap();
    assert_eq!(embeddings.len(), 2);
    assert_eq!(embeddings[0].len(), 768);

    // Vectors should be normalized (L2 norm ~= 1.0)
    let norm: f32 = embeddings[0].iter().map(|x| x * x).sum::<f32>().sqrt();
    assert!((norm - 1.0).abs() < 0.01, "Vector should be normalized");
}

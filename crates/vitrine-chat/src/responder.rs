//! Canned chat responder.
//!
//! Stands in for a language model: picks a reply (and zero or more artifact
//! drafts) from keyword heuristics over the incoming message. The reply
//! text is arbitrary; the drafts are what matter, one per artifact kind.

use chrono::Utc;

use vitrine_render::{
    ArtifactDescriptor, CONTENT_TYPE_CODE, CONTENT_TYPE_COMPONENT, CONTENT_TYPE_HTML,
};

/// A reply produced for one chat message.
#[derive(Debug, Clone)]
pub struct ChatReply {
    /// Assistant text shown to the user.
    pub text: String,

    /// Artifact drafts to create before the reply is returned.
    pub drafts: Vec<ArtifactDescriptor>,
}

/// Produce a reply for a chat message.
pub fn respond(message: &str) -> ChatReply {
    let lower = message.to_lowercase();

    if lower.contains("html") || lower.contains("webpage") {
        return ChatReply {
            text: "I'll create an HTML page for you with some interactive elements.".to_string(),
            drafts: vec![ArtifactDescriptor {
                id: draft_id("html"),
                content_type: CONTENT_TYPE_HTML.to_string(),
                payload: HTML_DEMO.to_string(),
                language: Some("html".to_string()),
                component: None,
            }],
        };
    }

    if lower.contains("react") || lower.contains("component") || lower.contains("counter") {
        return ChatReply {
            text: "I'll create an interactive component for you with state.".to_string(),
            drafts: vec![ArtifactDescriptor {
                id: draft_id("counter"),
                content_type: CONTENT_TYPE_COMPONENT.to_string(),
                payload: COUNTER_DEMO.to_string(),
                language: Some("javascript".to_string()),
                component: Some("App".to_string()),
            }],
        };
    }

    if lower.contains("code") || lower.contains("function") || lower.contains("algorithm") {
        return ChatReply {
            text: "Here is a code example with syntax highlighting.".to_string(),
            drafts: vec![ArtifactDescriptor {
                id: draft_id("code"),
                content_type: CONTENT_TYPE_CODE.to_string(),
                payload: CODE_DEMO.to_string(),
                language: Some("javascript".to_string()),
                component: None,
            }],
        };
    }

    ChatReply {
        text: "I can create interactive artifacts. Try asking me to:\n\n\
               - \"Create an HTML page\"\n\
               - \"Make a React counter\"\n\
               - \"Show me some code\""
            .to_string(),
        drafts: Vec::new(),
    }
}

/// Draft ids are a prefix plus a millisecond timestamp, which keeps them
/// inside the renderer's id allow-list.
fn draft_id(prefix: &str) -> String {
    format!("{}_{}", prefix, Utc::now().timestamp_millis())
}

const HTML_DEMO: &str = r#"<div class="max-w-2xl mx-auto p-8">
    <div class="bg-gradient-to-r from-blue-500 to-purple-600 text-white p-8 rounded-lg shadow-lg">
        <h1 class="text-3xl font-bold mb-2">Welcome</h1>
        <p class="opacity-90">A sample page rendered as a standalone artifact.</p>
    </div>
    <button id="demo" class="mt-6 bg-blue-500 hover:bg-blue-700 text-white font-bold py-2 px-4 rounded">
        Click me
    </button>
    <p id="result" class="mt-4 hidden text-green-600">It works.</p>
    <script>
        document.getElementById('demo').addEventListener('click', function () {
            document.getElementById('result').classList.remove('hidden');
        });
    </script>
</div>"#;

const COUNTER_DEMO: &str = r#"function App() {
  const [count, setCount] = React.useState(0);

  return (
    <div className="max-w-sm mx-auto p-6 bg-white rounded-lg shadow-lg text-center">
      <h1 className="text-2xl font-bold mb-4">Counter</h1>
      <p className="text-5xl font-mono mb-4">{count}</p>
      <div className="space-x-2">
        <button
          onClick={() => setCount(count - 1)}
          className="bg-red-500 hover:bg-red-700 text-white font-bold py-2 px-4 rounded"
        >
          -
        </button>
        <button
          onClick={() => setCount(0)}
          className="bg-gray-500 hover:bg-gray-700 text-white font-bold py-2 px-4 rounded"
        >
          Reset
        </button>
        <button
          onClick={() => setCount(count + 1)}
          className="bg-green-500 hover:bg-green-700 text-white font-bold py-2 px-4 rounded"
        >
          +
        </button>
      </div>
    </div>
  );
}"#;

const CODE_DEMO: &str = r#"// Higher-order function with closures
function createCounter(initialValue = 0) {
  let count = initialValue;

  return {
    increment: (step = 1) => count += step,
    decrement: (step = 1) => count -= step,
    getValue: () => count,
  };
}

const counter = createCounter(10);
counter.increment(5);
console.log(counter.getValue()); // 15"#;

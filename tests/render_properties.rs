/// Property tests for snapshot rendering
use depaware::prelude::*;
use proptest::prelude::*;

const ROOT: &str = "example.com/cmd/app";

fn sample_nodes() -> Vec<GraphNode> {
    vec![
        GraphNode::new(ROOT, ["fmt", "net/http", "example.com/lib/log", "golang.org/x/net/idna"]),
        GraphNode::new("fmt", ["io", "os", "unsafe"]),
        GraphNode::new("net/http", ["io", "crypto/tls", "golang.org/x/net/idna"]),
        GraphNode::new("crypto/tls", ["io", "runtime/cgo"]),
        GraphNode::new("example.com/lib/log", ["io", "example.com/lib/cgo", "os"]),
        GraphNode::new("example.com/lib/cgo", ["runtime/cgo", "unsafe"]),
        GraphNode::new("golang.org/x/net/idna", ["golang.org/x/text/unicode"]),
        GraphNode::new("golang.org/x/text/unicode", ["unsafe"]),
        GraphNode::new("io", Vec::<&str>::new()),
        GraphNode::new("os", ["io"]),
    ]
}

fn render(targets: &[&str], nodes: &[GraphNode], hints: &PreferredWhy) -> String {
    let targets: Vec<TargetConfig> = targets.iter().map(|t| TargetConfig::new(*t).unwrap()).collect();
    let mut graph = DependencyGraph::new(ROOT, targets.clone(), false);
    for target in &targets {
        graph.record_target(target, &UnitGraph::new(nodes.to_vec())).unwrap();
    }
    SnapshotRenderer::render(&graph, hints)
}

fn group(path: &str) -> u8 {
    if !path.contains('.') {
        0
    } else if path.contains("golang.org/x/") {
        1
    } else {
        2
    }
}

fn package_path() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{2,6}(/[a-z]{2,5}){0,2}",
        "golang\\.org/x/[a-z]{2,5}(/[a-z]{2,5})?",
        "[a-z]{2,6}\\.(com|io|org)(/[a-z]{2,5}){1,2}",
    ]
}

proptest! {
    #[test]
    fn generated_paths_are_plain_import_paths(path in package_path()) {
        prop_assert!(path.chars().all(|c| c.is_ascii_lowercase() || c == '.' || c == '/'), "{:?}", path);
    }

    #[test]
    fn rendering_ignores_node_and_import_order(
        nodes in Just(sample_nodes()).prop_shuffle(),
        reverse_imports in any::<bool>(),
    ) {
        let shuffled: Vec<GraphNode> = nodes
            .into_iter()
            .map(|mut node| {
                if reverse_imports {
                    node.imports.reverse();
                }
                node
            })
            .collect();

        let expected = render(&["linux", "darwin"], &sample_nodes(), &PreferredWhy::empty());
        prop_assert_eq!(render(&["linux", "darwin"], &shuffled, &PreferredWhy::empty()), expected);
    }

    #[test]
    fn rerendering_with_own_output_as_hints_is_stable(
        nodes in Just(sample_nodes()).prop_shuffle(),
    ) {
        let first = render(&["linux"], &nodes, &PreferredWhy::empty());
        let second = render(&["linux"], &nodes, &PreferredWhy::parse(first.as_bytes()));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn dependencies_are_grouped_then_sorted(
        imports in proptest::collection::vec(package_path(), 1..24),
    ) {
        let mut nodes = vec![GraphNode::new(ROOT, imports.clone())];
        nodes.extend(imports.iter().map(|p| GraphNode::new(p.as_str(), Vec::<String>::new())));

        let rendered = render(&["linux"], &nodes, &PreferredWhy::empty());
        let paths: Vec<&str> = rendered
            .lines()
            .skip(2)
            .filter_map(|line| line.split_whitespace().next())
            .collect();

        prop_assert!(!paths.is_empty());
        for pair in paths.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            prop_assert!((group(a), a) < (group(b), b), "{} rendered before {}", a, b);
        }
    }
}

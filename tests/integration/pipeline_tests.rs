//! Integration tests for the navigation analysis pipeline
//!
//! Each test lays out a small React Native project in a temp directory and
//! runs the full analysis over it.

use screenmap::analysis::{NavigationAnalysis, NavigationAnalyzer};
use screenmap::config::Config;
use screenmap::graph::{NavigationAction, NavigationEdge};
use screenmap::store::{MemoryStore, ScreenStore};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temp project root, canonicalized so paths compare equal to analysis output
fn project() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let root = dir.path().canonicalize().unwrap();
    (dir, root)
}

fn write(root: &Path, rel: &str, contents: &str) -> PathBuf {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, contents).unwrap();
    path
}

fn analyze(root: &Path, config: &Config) -> NavigationAnalysis {
    NavigationAnalyzer::new(config).unwrap().analyze(root)
}

fn screen_names(analysis: &NavigationAnalysis) -> Vec<&str> {
    analysis
        .graph
        .screens
        .iter()
        .map(|screen| screen.name.as_str())
        .collect()
}

fn basic_app(root: &Path) {
    write(
        root,
        "src/navigation/AppNavigator.tsx",
        r#"
import { createStackNavigator } from '@react-navigation/stack';
const Stack = createStackNavigator();
export default function AppNavigator() {
  return (
    <Stack.Navigator>
      <Stack.Screen name="Home" component={HomeScreen} />
      <Stack.Screen name="Profile" component={ProfileScreen} />
    </Stack.Navigator>
  );
}
"#,
    );
    write(
        root,
        "src/screens/HomeScreen.tsx",
        r#"import React from 'react';
import { Button } from 'react-native';
export default function HomeScreen({ navigation }) {
  return <Button onPress={() => navigation.navigate("Profile")} />;
}
"#,
    );
    write(
        root,
        "src/screens/ProfileScreen.tsx",
        "export default function ProfileScreen() { return null; }\n",
    );
}

// ============================================================================
// End-to-end
// ============================================================================

#[test]
fn test_basic_app_graph() {
    let (_dir, root) = project();
    basic_app(&root);

    let analysis = analyze(&root, &Config::default());

    assert_eq!(screen_names(&analysis), vec!["HomeScreen", "ProfileScreen"]);
    assert_eq!(
        analysis.graph.edges,
        vec![NavigationEdge::new("HomeScreen", "Profile", NavigationAction::Navigate)]
    );
    assert_eq!(analysis.routes.get("Home").map(String::as_str), Some("HomeScreen"));
    assert_eq!(analysis.routes.get("Profile").map(String::as_str), Some("ProfileScreen"));
    assert!(!analysis.truncated);

    let home = analysis.graph.find_screen("HomeScreen").unwrap();
    assert_eq!(home.file_path, root.join("src/screens/HomeScreen.tsx"));
    assert_eq!(home.screen_type, "screen");
    assert_eq!(
        home.dependencies,
        "import React from 'react';, import { Button } from 'react-native';"
    );
}

#[test]
fn test_analysis_is_idempotent() {
    let (_dir, root) = project();
    basic_app(&root);
    let config = Config::default();

    let first = analyze(&root, &config);
    let second = analyze(&root, &config);

    assert_eq!(first.graph, second.graph);
    assert_eq!(first.routes, second.routes);
    assert_eq!(first.scanned_navigators, second.scanned_navigators);
}

#[test]
fn test_empty_project() {
    let (_dir, root) = project();

    let analysis = analyze(&root, &Config::default());

    assert!(analysis.graph.screens.is_empty());
    assert!(analysis.graph.edges.is_empty());
    assert!(analysis.routes.is_empty());
}

#[test]
fn test_analysis_rooted_at_src_keeps_directory_screens() {
    let (_dir, root) = project();
    write(&root, "src/screens/About.tsx", "export default About;");

    let from_project = analyze(&root, &Config::default());
    let from_src = analyze(&root.join("src"), &Config::default());

    assert_eq!(screen_names(&from_project), vec!["About"]);
    assert_eq!(screen_names(&from_src), vec!["About"]);
}

#[test]
fn test_unreadable_navigator_does_not_stop_discovery() {
    let (_dir, root) = project();
    let broken = root.join("src/navigation/Broken.tsx");
    fs::create_dir_all(broken.parent().unwrap()).unwrap();
    fs::write(&broken, [0xff, 0xfe, 0x00, 0xc3, 0x28]).unwrap();
    let valid = write(
        &root,
        "src/navigation/Main.tsx",
        r#"<Stack.Screen name="Home" component={HomeScreen} />"#,
    );

    let analysis = analyze(&root, &Config::default());

    assert_eq!(analysis.routes.get("Home").map(String::as_str), Some("HomeScreen"));
    assert_eq!(analysis.scanned_navigators, vec![broken, valid]);
    assert!(!analysis.truncated);
}

#[test]
fn test_missing_root_yields_empty_graph() {
    let (_dir, root) = project();

    let analysis = analyze(&root.join("does-not-exist"), &Config::default());

    assert!(analysis.graph.screens.is_empty());
    assert!(analysis.routes.is_empty());
}

// ============================================================================
// Navigator discovery
// ============================================================================

#[test]
fn test_nested_navigator_outside_navigation_dir() {
    let (_dir, root) = project();
    write(
        &root,
        "src/navigation/RootNavigator.tsx",
        r#"<Drawer.Screen name="Main" component={MainStack} />"#,
    );
    write(
        &root,
        "src/stacks/MainStack.tsx",
        r#"export default function MainStack() {
  return <Stack.Screen name="Settings" component={SettingsView} />;
}"#,
    );
    let settings = write(
        &root,
        "src/components/SettingsView.tsx",
        r#"export function SettingsView({ navigation }) { navigation.goBack(); }"#,
    );

    let analysis = analyze(&root, &Config::default());

    assert_eq!(analysis.routes.get("Main").map(String::as_str), Some("MainStack"));
    assert_eq!(analysis.routes.get("Settings").map(String::as_str), Some("SettingsView"));
    assert!(analysis
        .scanned_navigators
        .contains(&root.join("src/stacks/MainStack.tsx")));

    // Routed component: a screen even though no path heuristic applies
    let names = screen_names(&analysis);
    assert!(names.contains(&"SettingsView"));
    assert!(analysis
        .graph
        .screens
        .iter()
        .any(|screen| screen.file_path == settings));
    // goBack has no target
    assert!(analysis.graph.edges_from("SettingsView").next().is_none());
}

#[test]
fn test_mutually_nested_navigators_terminate() {
    let (_dir, root) = project();
    write(
        &root,
        "src/navigation/AStack.tsx",
        r#"export function AStack() { return <Stack.Screen name="B" component={BStack} />; }"#,
    );
    write(
        &root,
        "src/navigation/BStack.tsx",
        r#"export function BStack() { return <Stack.Screen name="A" component={AStack} />; }"#,
    );

    let analysis = analyze(&root, &Config::default());

    assert_eq!(analysis.routes.len(), 2);
    assert_eq!(analysis.scanned_navigators.len(), 2);
    assert!(!analysis.truncated);
}

#[test]
fn test_later_file_wins_for_duplicate_route() {
    let (_dir, root) = project();
    write(
        &root,
        "src/navigation/A.tsx",
        r#"<Stack.Screen name="Dup" component={FirstScreen} />"#,
    );
    write(
        &root,
        "src/navigation/B.tsx",
        r#"<Stack.Screen name="Dup" component={SecondScreen} />"#,
    );

    let analysis = analyze(&root, &Config::default());

    assert_eq!(analysis.routes.get("Dup").map(String::as_str), Some("SecondScreen"));
}

#[test]
fn test_object_map_routes() {
    let (_dir, root) = project();
    write(
        &root,
        "src/navigation/index.js",
        r#"const AppStack = createStackNavigator({
  Home: HomeScreen,
  Details: DetailsScreen,
});"#,
    );

    let analysis = analyze(&root, &Config::default());

    assert_eq!(analysis.routes.get("Home").map(String::as_str), Some("HomeScreen"));
    assert_eq!(analysis.routes.get("Details").map(String::as_str), Some("DetailsScreen"));
}

#[test]
fn test_falls_back_to_project_root_without_navigation_dir() {
    let (_dir, root) = project();
    write(
        &root,
        "app/Routes.tsx",
        r#"<Stack.Screen name="Login" component={LoginView} />"#,
    );

    let analysis = analyze(&root, &Config::default());

    assert_eq!(analysis.routes.get("Login").map(String::as_str), Some("LoginView"));
}

#[test]
fn test_depth_limit_marks_truncated() {
    let (_dir, root) = project();
    write(
        &root,
        "src/navigation/RootNavigator.tsx",
        r#"<Stack.Screen name="Main" component={MainStack} />"#,
    );
    write(
        &root,
        "src/stacks/MainStack.tsx",
        r#"export function MainStack() { return <Stack.Screen name="Deep" component={DeepScreen} />; }"#,
    );

    let mut config = Config::default();
    config.limits.max_depth = 0;
    let analysis = analyze(&root, &config);

    assert!(analysis.truncated);
    assert!(analysis.routes.contains_key("Main"));
    assert!(!analysis.routes.contains_key("Deep"));
}

// ============================================================================
// Lazy imports
// ============================================================================

#[test]
fn test_lazy_import_resolves_screen_file() {
    let (_dir, root) = project();
    write(
        &root,
        "src/navigation/Root.tsx",
        r#"const Lazy = React.lazy(() => import("../lazy/Thing"));
<Stack.Screen name="Lazy" component={Lazy} />"#,
    );
    let thing = write(
        &root,
        "src/lazy/Thing.tsx",
        r#"export default function Thing({ navigation }) { navigation.push("Home"); }"#,
    );

    let analysis = analyze(&root, &Config::default());

    assert!(analysis.graph.screens.iter().any(|s| s.file_path == thing));
    assert_eq!(
        analysis.graph.edges,
        vec![NavigationEdge::new("Thing", "Home", NavigationAction::Push)]
    );
}

#[test]
fn test_package_lazy_import_is_ignored() {
    let (_dir, root) = project();
    write(
        &root,
        "src/navigation/Root.tsx",
        r#"const Remote = lazy(() => import("remote-package/Screen"));
<Stack.Screen name="Remote" component={Remote} />"#,
    );

    let analysis = analyze(&root, &Config::default());

    assert_eq!(analysis.routes.get("Remote").map(String::as_str), Some("Remote"));
    assert!(analysis.graph.screens.is_empty());
}

// ============================================================================
// Screens and edges
// ============================================================================

#[test]
fn test_feature_screens_and_edge_dedup() {
    let (_dir, root) = project();
    write(
        &root,
        "src/features/cart/screens/Cart.tsx",
        r#"
const { navigate } = navigation;
navigate("Checkout");
navigation.navigate("Checkout");
props.navigation.push("Checkout");
"#,
    );
    write(&root, "src/features/cart/components/CartRow.tsx", "export function CartRow() {}");

    let analysis = analyze(&root, &Config::default());

    assert_eq!(screen_names(&analysis), vec!["Cart"]);
    assert_eq!(
        analysis.graph.edges,
        vec![
            NavigationEdge::new("Cart", "Checkout", NavigationAction::Navigate),
            NavigationEdge::new("Cart", "Checkout", NavigationAction::Push),
        ]
    );
}

#[test]
fn test_hook_based_navigation() {
    let (_dir, root) = project();
    write(
        &root,
        "src/screens/SettingsScreen.tsx",
        r#"
const navigation = useNavigation();
navigation.reset("Login");
"#,
    );

    let analysis = analyze(&root, &Config::default());

    assert_eq!(
        analysis.graph.edges,
        vec![NavigationEdge::new("SettingsScreen", "Login", NavigationAction::Reset)]
    );
}

#[test]
fn test_excluded_directories_are_skipped() {
    let (_dir, root) = project();
    write(
        &root,
        "node_modules/lib/src/screens/VendorScreen.tsx",
        "export default function VendorScreen() {}",
    );
    write(&root, "src/screens/OwnScreen.tsx", "export default function OwnScreen() {}");

    let analysis = analyze(&root, &Config::default());

    assert_eq!(screen_names(&analysis), vec!["OwnScreen"]);
}

// ============================================================================
// Store
// ============================================================================

#[test]
fn test_store_upsert_is_idempotent() {
    let (_dir, root) = project();
    basic_app(&root);
    let store_path = root.join("screens.json");

    let analysis = analyze(&root, &Config::default());

    let mut store = MemoryStore::open(&store_path).unwrap();
    assert_eq!(store.insert_screens(&analysis.graph.screens).unwrap(), 2);
    assert_eq!(store.insert_navigation_paths(&analysis.graph.edges).unwrap(), 1);
    store.save(&store_path).unwrap();

    let rerun = analyze(&root, &Config::default());
    let mut store = MemoryStore::open(&store_path).unwrap();
    assert_eq!(store.insert_screens(&rerun.graph.screens).unwrap(), 0);
    assert_eq!(store.insert_navigation_paths(&rerun.graph.edges).unwrap(), 0);
    assert_eq!(store.screens().len(), 2);
}

//! Global CSS styles for RMG Studio.
//!
//! Dark terminal palette; the graph colors match `rmgstudio_core::graph::style`.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* VOID (Backgrounds) */
  --void-black: #0a0a0a;
  --void-lighter: #0a0e0f;
  --void-border: #1a1a1a;

  /* MOSS GREEN (Status) */
  --moss: #5a7a5a;
  --moss-glow: #7cb87c;

  /* CYAN (Input, selection) */
  --cyan: #00d4aa;
  --cyan-glow: rgba(0, 212, 170, 0.3);

  /* GOLD (Titles, main routes, start zones) */
  --gold: #d4af37;
  --gold-glow: rgba(212, 175, 55, 0.3);

  /* TEXT */
  --text-primary: #f5f5f5;
  --text-secondary: rgba(245, 245, 245, 0.7);
  --text-muted: rgba(245, 245, 245, 0.5);

  /* SEMANTIC */
  --danger: #ff3366;
  --warning: #ff9f00;
  --info: #5f8fff;

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 15px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-mono);
  background: var(--void-black);
  color: var(--text-primary);
  line-height: 1.5;
  min-height: 100vh;
}

/* === Shell === */
.editor-shell {
  display: flex;
  flex-direction: column;
  min-height: 100vh;
}

.editor-header {
  position: sticky;
  top: 0;
  z-index: 10;
  background: var(--void-lighter);
  border-bottom: 1px solid var(--void-border);
  padding: 0.5rem 1rem 0;
}

.editor-header-inner {
  display: flex;
  align-items: baseline;
  gap: 1rem;
}

.app-title {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  font-weight: 400;
  color: var(--gold);
  text-shadow: 0 0 30px var(--gold-glow);
  letter-spacing: 0.05em;
}

.document-title {
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

.editor-body {
  flex: 1;
  padding: 1rem;
}

/* === Toolbar === */
.toolbar {
  display: flex;
  align-items: center;
  gap: 1.5rem;
  padding: 0.5rem 0;
}

.toolbar-group {
  display: flex;
  gap: 0.25rem;
}

.toolbar-recent {
  margin-left: auto;
  min-width: 14rem;
}

/* === Panel Tabs === */
.panel-tabs {
  display: flex;
  gap: 0.25rem;
  overflow-x: auto;
}

.panel-tab {
  padding: 0.5rem 0.875rem;
  color: var(--text-secondary);
  text-decoration: none;
  font-size: var(--text-sm);
  border-bottom: 2px solid transparent;
  transition: all 0.2s ease;
}

.panel-tab:hover {
  color: var(--text-primary);
}

.panel-tab.active {
  color: var(--cyan);
  border-bottom-color: var(--cyan);
}

/* === Sections & Cards === */
.panel-section {
  margin-bottom: 1.5rem;
}

.section-header {
  display: flex;
  align-items: baseline;
  gap: 0.75rem;
  margin-bottom: 0.75rem;
}

.section-title {
  font-family: var(--font-serif);
  font-size: var(--text-lg);
  font-weight: 400;
  font-style: italic;
  color: var(--gold);
}

.section-subtitle,
.card-meta {
  color: var(--text-muted);
  font-size: var(--text-xs);
}

.section-toolbar {
  margin-bottom: 0.75rem;
}

.subsection-title {
  font-size: var(--text-sm);
  color: var(--text-secondary);
  margin: 0.75rem 0 0.5rem;
}

.card-list,
.row-list {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.editor-card {
  border: 1px solid var(--void-border);
  border-radius: 4px;
  padding: 0.75rem 1rem;
  background: var(--void-lighter);
}

.editor-card.start {
  border-color: var(--gold-glow);
}

.card-header {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  margin-bottom: 0.5rem;
}

.card-header .btn-danger {
  margin-left: auto;
}

.card-title {
  color: var(--text-primary);
  font-weight: 600;
}

.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(12rem, 1fr));
  gap: 0.5rem 1rem;
  align-items: end;
}

.card-grid.compact {
  grid-template-columns: repeat(auto-fill, minmax(7rem, 1fr));
}

.editor-row {
  display: flex;
  flex-wrap: wrap;
  align-items: end;
  gap: 0.5rem 1rem;
  padding: 0.5rem 0.75rem;
  border: 1px solid var(--void-border);
  border-radius: 4px;
}

.editor-row.highlighted {
  border-color: var(--cyan);
}

.editor-row.broken {
  border-color: var(--danger);
}

.row-index {
  color: var(--text-muted);
  font-size: var(--text-xs);
}

.row-label {
  min-width: 9rem;
  color: var(--text-secondary);
}

.empty-hint {
  color: var(--text-muted);
  font-style: italic;
  margin: 0.5rem 0;
}

.summary-list {
  list-style: none;
  color: var(--text-secondary);
}

/* === Buttons === */
.btn-primary,
.btn-danger,
.btn-ghost {
  padding: 0.375rem 1rem;
  background: transparent;
  border: 1px solid var(--moss);
  border-radius: 4px;
  color: var(--text-primary);
  font-family: var(--font-mono);
  font-size: var(--text-sm);
  cursor: pointer;
  transition: all 0.2s ease;
}

.btn-primary:hover {
  border-color: var(--moss-glow);
  box-shadow: 0 0 20px rgba(124, 184, 124, 0.3);
}

.btn-danger {
  border-color: rgba(255, 51, 102, 0.4);
  color: var(--danger);
}

.btn-danger:hover {
  border-color: var(--danger);
}

.btn-ghost {
  border-color: transparent;
  color: var(--text-secondary);
}

.btn-ghost:hover {
  color: var(--text-primary);
  border-color: var(--void-border);
}

.btn-badge {
  padding: 0.375rem 0.75rem;
  background: transparent;
  border: 1px solid var(--moss);
  border-radius: 4px;
  color: var(--cyan);
  font-family: var(--font-mono);
  font-size: var(--text-xs);
  cursor: pointer;
}

.btn-badge:hover {
  border-color: var(--moss-glow);
  box-shadow: 0 0 10px rgba(124, 184, 124, 0.2);
}

button:disabled {
  opacity: 0.4;
  cursor: default;
  box-shadow: none;
}

.icon-btn {
  background: transparent;
  border: none;
  color: var(--text-muted);
  font-size: var(--text-lg);
  line-height: 1;
  cursor: pointer;
  padding: 0 0.25rem;
}

.icon-btn:hover {
  color: var(--danger);
}

/* === Form Fields === */
.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
}

.input-label {
  color: var(--text-secondary);
  font-size: var(--text-xs);
}

.input-hint {
  color: var(--text-muted);
}

.input-field {
  width: 100%;
  padding: 0.375rem 0.625rem;
  background: transparent;
  border: 1px solid var(--void-border);
  border-radius: 4px;
  color: var(--cyan);
  font-family: var(--font-mono);
  font-size: var(--text-sm);
}

.input-field::placeholder {
  color: var(--text-muted);
  font-style: italic;
}

.input-field:focus {
  outline: none;
  border-color: var(--cyan);
  box-shadow: 0 0 0 1px var(--cyan), 0 0 20px var(--cyan-glow);
}

.input-field.invalid {
  border-color: var(--danger);
}

.input-field.select {
  background: var(--void-lighter);
}

.textarea {
  resize: vertical;
}

.checkbox-field {
  flex-direction: row;
  align-items: center;
  gap: 0.5rem;
  font-size: var(--text-sm);
}

.checkbox-field input {
  accent-color: var(--cyan);
}

.toggle-field .input-field {
  min-width: 7rem;
}

.toggle-on { color: var(--moss-glow); }
.toggle-off { color: var(--danger); }

/* === Chips === */
.chip-list {
  display: flex;
  flex-wrap: wrap;
  gap: 0.375rem;
  min-height: 1.5rem;
}

.chip {
  display: inline-flex;
  align-items: center;
  gap: 0.25rem;
  padding: 0.125rem 0.5rem;
  border: 1px solid var(--void-border);
  border-radius: 999px;
  font-size: var(--text-xs);
  color: var(--text-primary);
}

.chip-remove {
  background: transparent;
  border: none;
  color: var(--text-muted);
  cursor: pointer;
}

.chip-remove:hover {
  color: var(--danger);
}

.chip-input {
  flex: 1;
}

.chip-input-row {
  display: flex;
  gap: 0.5rem;
  align-items: center;
  margin-top: 0.375rem;
}

.reward-editor {
  margin-top: 0.5rem;
  padding-top: 0.5rem;
  border-top: 1px dashed var(--void-border);
}

.creature-stack {
  display: flex;
  gap: 0.5rem;
  align-items: center;
  margin-bottom: 0.375rem;
}

/* === Terrains === */
.terrain-swatch {
  width: 1rem;
  height: 1rem;
  border-radius: 50%;
  border: 1px solid var(--void-border);
}
.terrain-grass { background: #4c9a2a; }
.terrain-dirt { background: #8b5a2b; }
.terrain-sand { background: #d8c07a; }
.terrain-snow { background: #e8eef2; }
.terrain-swamp { background: #4a6b4a; }
.terrain-rough { background: #9a7b4f; }
.terrain-lava { background: #c8401e; }
.terrain-subterranean { background: #5a4a3a; }
.terrain-highlands { background: #7a8a5a; }
.terrain-wasteland { background: #a88e6a; }
.terrain-water { background: #2a5caa; }

/* === Zone Graph === */
.graph-layout {
  display: flex;
  gap: 1.5rem;
  align-items: flex-start;
}

.graph-canvas {
  flex-shrink: 0;
}

.zone-graph {
  border: 1px solid var(--void-border);
  border-radius: 4px;
  cursor: crosshair;
}

.graph-side {
  flex: 1;
  min-width: 20rem;
}

.graph-inspector {
  margin-bottom: 1.5rem;
}

.inspector-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 0.5rem;
}

.graph-legend {
  display: flex;
  gap: 1rem;
  margin-top: 0.5rem;
  font-size: var(--text-xs);
  color: var(--text-muted);
}

.legend-item::before {
  content: '';
  display: inline-block;
  width: 1.5rem;
  height: 0;
  margin-right: 0.375rem;
  vertical-align: middle;
  border-top: 3px solid var(--gold);
}

.legend-item.secondary::before { border-top: 2px solid var(--info); }
.legend-item.guarded::before { border-top: 2px dashed var(--info); }

/* === Status Bar === */
.status-bar {
  position: sticky;
  bottom: 0;
  background: var(--void-lighter);
  border-top: 1px solid var(--void-border);
  font-size: var(--text-xs);
}

.status-bar-inner {
  display: flex;
  align-items: center;
  gap: 1rem;
  padding: 0.375rem 1rem;
}

.status-counts {
  display: flex;
  gap: 0.375rem;
  background: transparent;
  border: none;
  font-family: var(--font-mono);
  font-size: var(--text-xs);
  color: var(--text-secondary);
  cursor: pointer;
}

.status-counts.has-errors .status-errors { color: var(--danger); }
.status-counts.has-warnings .status-warnings { color: var(--warning); }
.status-counts.clean { color: var(--moss-glow); }

.status-message {
  color: var(--text-secondary);
}

.status-message.error {
  color: var(--danger);
}

.status-history {
  margin-left: auto;
  color: var(--text-muted);
}

.issue-list {
  list-style: none;
  max-height: 12rem;
  overflow-y: auto;
  padding: 0.25rem 1rem 0.5rem;
}

.issue {
  display: flex;
  gap: 0.75rem;
}

.issue.error .issue-severity { color: var(--danger); }
.issue.warning .issue-severity { color: var(--warning); }

.issue-path {
  color: var(--cyan);
}

.issue-message {
  color: var(--text-secondary);
}

.status-sep {
  color: var(--void-border);
}

.status-dismiss {
  background: transparent;
  border: none;
  color: var(--text-muted);
  cursor: pointer;
}
"#;

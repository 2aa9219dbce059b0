pub const APP_STYLES: &str = r#"
:root {
    --bg-page: #f3f4f6;
    --bg-card: #ffffff;
    --bg-muted: #f9fafb;
    --text-primary: #111827;
    --text-secondary: #4b5563;
    --text-muted: #6b7280;
    --accent-bg: #4f46e5;
    --accent-bg-hover: #4338ca;
    --accent-soft: #eef2ff;
    --accent-text: #3730a3;
    --border-color: #e5e7eb;
    --danger-text: #dc2626;
    --danger-soft: #fef2f2;
    --success-text: #16a34a;
    --radius-md: 8px;
    --shadow-sm: 0 1px 2px rgba(0, 0, 0, 0.08);
}

* {
    box-sizing: border-box;
}

html, body, #main {
    width: 100%;
    height: 100%;
    margin: 0;
    overflow: hidden;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg-page);
    color: var(--text-primary);
}

.app-shell {
    height: 100vh;
    display: flex;
    flex-direction: column;
    overflow: hidden;
}

.app-header, .app-footer {
    background: var(--bg-card);
    box-shadow: var(--shadow-sm);
    padding: 0.75rem 1.5rem;
}

.app-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.app-title {
    margin: 0;
    font-size: 1.5rem;
    font-weight: 700;
}

.app-footer {
    margin-top: auto;
    text-align: center;
    font-size: 0.875rem;
    color: var(--text-muted);
}

.primary-btn {
    display: inline-flex;
    align-items: center;
    gap: 0.25rem;
    padding: 0.4rem 0.9rem;
    border: none;
    border-radius: var(--radius-md);
    background: var(--accent-bg);
    color: white;
    font-size: 0.875rem;
    font-weight: 500;
    cursor: pointer;
}

.primary-btn:hover:not(:disabled) {
    background: var(--accent-bg-hover);
}

.primary-btn:disabled {
    opacity: 0.6;
    cursor: not-allowed;
}

.icon-btn {
    background: none;
    border: none;
    color: var(--text-muted);
    font-size: 1.1rem;
    cursor: pointer;
}

.app-main {
    flex: 1;
    display: flex;
    flex-direction: column;
    overflow: hidden;
}

.view-tabs {
    display: flex;
    background: var(--bg-card);
    border-bottom: 1px solid var(--border-color);
    padding: 0.25rem 0.5rem;
}

.view-tab {
    flex: 1;
    position: relative;
    padding: 0.5rem;
    background: none;
    border: none;
    border-bottom: 2px solid transparent;
    color: var(--text-muted);
    font-size: 0.875rem;
    font-weight: 500;
    cursor: pointer;
}

.view-tab.active {
    color: var(--accent-bg);
    border-bottom-color: var(--accent-bg);
}

.tab-badge {
    margin-left: 0.4rem;
    padding: 0.1rem 0.45rem;
    border-radius: 999px;
    background: var(--accent-bg);
    color: white;
    font-size: 0.7rem;
    font-weight: 700;
}

.panes {
    flex: 1;
    display: flex;
    overflow: hidden;
}

.panes-row {
    flex-direction: row;
}

.panes-column {
    flex-direction: column;
}

.pane {
    flex: 1;
    min-width: 0;
    padding: 1rem;
    overflow: hidden;
}

.panes-column .pane {
    padding: 0.5rem;
}

.card {
    height: 100%;
    display: flex;
    flex-direction: column;
    background: var(--bg-card);
    border-radius: var(--radius-md);
    box-shadow: var(--shadow-sm);
    overflow: hidden;
}

.card-title {
    margin: 0;
    padding: 1rem 1rem 0.5rem;
    font-size: 1.1rem;
    font-weight: 500;
}

.card-body {
    flex: 1;
    min-height: 0;
    display: flex;
    flex-direction: column;
    overflow: hidden;
}

.empty-state {
    flex: 1;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    gap: 0.75rem;
    color: var(--text-muted);
    padding: 1rem;
    text-align: center;
}

.empty-icon {
    font-size: 2.5rem;
}

.panel-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 0.5rem;
    padding: 0.6rem 1rem;
    border-bottom: 1px solid var(--border-color);
}

.panel-header.error {
    background: var(--danger-soft);
    color: var(--danger-text);
}

.panel-header.uploading {
    background: var(--accent-soft);
    color: var(--accent-text);
}

.doc-name {
    margin: 0;
    font-weight: 500;
    white-space: nowrap;
    overflow: hidden;
    text-overflow: ellipsis;
}

.doc-meta {
    margin: 0.15rem 0 0;
    font-size: 0.75rem;
    color: var(--success-text);
    white-space: nowrap;
    overflow: hidden;
    text-overflow: ellipsis;
}

.page-area {
    flex: 1;
    position: relative;
    overflow: auto;
    display: flex;
    justify-content: center;
    background: var(--bg-page);
    padding: 0.5rem;
}

.page-canvas {
    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.15);
    background: white;
}

.page-overlay {
    position: absolute;
    inset: 0;
    display: flex;
    align-items: center;
    justify-content: center;
    background: rgba(243, 244, 246, 0.75);
}

.pager {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 0.5rem;
    border-top: 1px solid var(--border-color);
    font-size: 0.875rem;
}

.pager button {
    padding: 0.25rem 0.6rem;
    border: 1px solid var(--border-color);
    border-radius: var(--radius-md);
    background: var(--bg-card);
    cursor: pointer;
}

.pager button:disabled {
    background: var(--bg-page);
    color: var(--text-muted);
    cursor: not-allowed;
}

.spinner {
    width: 2rem;
    height: 2rem;
    border: 3px solid var(--accent-soft);
    border-top-color: var(--accent-bg);
    border-radius: 50%;
    animation: spin 0.8s linear infinite;
}

@keyframes spin {
    to {
        transform: rotate(360deg);
    }
}

.transcript {
    flex: 1;
    overflow-y: auto;
    padding: 0.5rem;
}

.qa-entry {
    display: flex;
    flex-direction: column;
    gap: 0.6rem;
    margin-bottom: 1.25rem;
}

.bubble {
    padding: 0.7rem 1rem;
    border-radius: var(--radius-md);
    font-size: 0.875rem;
    line-height: 1.4;
    white-space: pre-wrap;
}

.bubble.question {
    background: var(--accent-soft);
    color: var(--accent-text);
    font-weight: 500;
}

.bubble.answer {
    background: var(--bg-muted);
    color: var(--text-primary);
}

.bubble.pending {
    color: var(--text-muted);
    font-style: italic;
}

.suggestions {
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
}

.suggestions h3 {
    margin: 0 0 0.25rem;
    font-size: 0.875rem;
    color: var(--text-secondary);
}

.suggestion {
    text-align: left;
    padding: 0.5rem 0.75rem;
    border: none;
    border-radius: var(--radius-md);
    background: var(--accent-soft);
    color: var(--accent-text);
    font-size: 0.875rem;
    cursor: pointer;
}

.link-btn {
    align-self: flex-start;
    background: none;
    border: none;
    padding: 0;
    color: var(--accent-bg);
    font-size: 0.875rem;
    font-weight: 500;
    cursor: pointer;
}

.ask-form {
    display: flex;
    padding: 0.5rem;
    border-top: 1px solid var(--border-color);
    background: var(--bg-card);
}

.ask-input {
    flex: 1;
    min-width: 0;
    padding: 0.5rem 1rem;
    border: 1px solid var(--border-color);
    border-radius: var(--radius-md) 0 0 var(--radius-md);
    font-size: 0.875rem;
    outline: none;
}

.ask-form .primary-btn {
    border-radius: 0 var(--radius-md) var(--radius-md) 0;
}
"#;

pub const FOLDER_DIALOG_STYLES: &str = r#"
/* Backdrop */
.folder-dialog-backdrop {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.5);
    display: flex;
    align-items: center;
    justify-content: center;
    z-index: 30;
}

/* Card */
.folder-dialog {
    background: var(--window-bg, #ffffff);
    color: var(--text-primary, #111827);
    padding: 1.5rem;
    border-radius: 0.5rem;
    width: 100%;
    max-width: 24rem;
    box-sizing: border-box;
}

.folder-dialog-title {
    margin: 0 0 1rem 0;
    font-size: 1.125rem;
    font-weight: 700;
}

/* Inputs */
.folder-dialog-input {
    width: 100%;
    padding: 0.75rem;
    margin-bottom: 0.5rem;
    border: 1px solid var(--border-color, #d1d5db);
    border-radius: 0.5rem;
    outline: none;
    box-sizing: border-box;
    font-size: 0.875rem;
}

.folder-dialog-input:focus {
    border-color: var(--accent-bg, #3b82f6);
    box-shadow: 0 0 0 2px rgba(59, 130, 246, 0.25);
}

.folder-dialog-input.has-error {
    border-color: var(--danger-bg, #ef4444);
    margin-bottom: 0.25rem;
}

.folder-dialog-input.has-error:focus {
    box-shadow: 0 0 0 2px rgba(239, 68, 68, 0.25);
}

.folder-dialog-error {
    margin: 0 0 0.5rem 0;
    color: var(--danger-bg, #ef4444);
    font-size: 0.875rem;
}

/* Buttons */
.folder-dialog-actions {
    display: flex;
    justify-content: flex-end;
    gap: 0.5rem;
    margin-top: 1rem;
}

.folder-dialog-button {
    border: none;
    color: #ffffff;
    cursor: pointer;
    padding: 0.5rem 1rem;
    border-radius: 0.5rem;
    transition: background 0.15s ease;
}

.folder-dialog-button.cancel {
    background: #6b7280;
}

.folder-dialog-button.cancel:hover {
    background: #4b5563;
}

.folder-dialog-button.create {
    background: #2563eb;
}

.folder-dialog-button.create:hover {
    background: #1d4ed8;
}
"#;

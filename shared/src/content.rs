//! Fixed page content.
//!
//! Datasets are `const` slices with process lifetime; the surrounding copy is
//! grouped per page region.

use crate::{QuickCheck, ResourceLink, StopCodeEntry, TroubleshootingStep};

pub mod hero {
    //! Hero region copy.

    /// Title text before the emphasized phrase.
    pub const TITLE_LEAD: &str = "Resolve ";
    /// Emphasized phrase inside the title.
    pub const TITLE_EMPHASIS: &str = "Blue Screen of Death";
    /// Title text after the emphasized phrase.
    pub const TITLE_TAIL: &str = " Incidents with Confidence";
    /// Summary paragraph under the title.
    pub const SUMMARY: &str = "A structured troubleshooting playbook for Windows professionals \
                               and power users. Follow the diagnostic timeline, validate \
                               suspect drivers, and harden systems to stop recurring BSOD \
                               loops.";
    /// Heading of the quick response checklist card.
    pub const CHECKLIST_HEADING: &str = "Quick Response Checklist";
}

pub mod timeline {
    //! Diagnostic timeline copy.

    /// Section heading.
    pub const HEADING: &str = "Structured Diagnostic Timeline";
    /// Section badge.
    pub const BADGE: &str = "5-60 minute workflow";
}

pub mod cheat_sheet {
    //! Stop code cheat sheet copy.

    /// Section heading.
    pub const HEADING: &str = "Stop Code Cheat Sheet";
    /// Section badge.
    pub const BADGE: &str = "Most common crash signatures";
}

pub mod hardening {
    //! Proactive hardening copy.

    /// Section heading.
    pub const HEADING: &str = "Proactive Hardening Steps";
    /// Section badge.
    pub const BADGE: &str = "Prevent repeat incidents";
}

pub mod resources {
    //! Reference resources copy.

    /// Section heading.
    pub const HEADING: &str = "Reference Resources";
    /// Section badge.
    pub const BADGE: &str = "Dig deeper when needed";
    /// Trailing indicator on every resource card.
    pub const OPEN_INDICATOR: &str = "Open resource ↗";
    /// Links open in a new browsing context.
    pub const LINK_TARGET: &str = "_blank";
    /// Rel attribute for external links.
    pub const LINK_REL: &str = "noreferrer";
}

pub mod footer {
    //! Footer copy.

    /// Escalation note heading.
    pub const ESCALATE_HEADING: &str = "Need to escalate?";
    /// Escalation note body.
    pub const ESCALATE_BODY: &str = "Collect minidumps, full system info, and timeline of \
                                     changes before engaging Microsoft Premier Support or the \
                                     OEM. A disciplined handoff shortens resolution time \
                                     dramatically.";
    /// Recovery note heading.
    pub const RECOVERY_HEADING: &str = "Disaster recovery tip";
    /// Recovery note body.
    pub const RECOVERY_BODY: &str = "Keep a bootable USB toolkit (WinPE, MemTest86, storage \
                                     diagnostics) ready. When BSODs transition into boot \
                                     loops, offline tools are your lifeline.";
}

/// Quick response checklist, first item emphasized.
pub const QUICK_CHECKS: &[QuickCheck] = &[
    QuickCheck {
        title: "Capture the Stop Code",
        description: "Note the stop code or error message shown on the BSOD screen (e.g., \
                      CRITICAL_PROCESS_DIED). It narrows the root cause dramatically.",
        highlight: "Snap a photo before rebooting to preserve details.",
    },
    QuickCheck {
        title: "Check Recent Changes",
        description: "Think about the latest drivers, Windows updates, or hardware you \
                      installed. Most BSODs surface right after a system change.",
        highlight: "Roll back or uninstall the suspect change to see if stability returns.",
    },
    QuickCheck {
        title: "Collect Dumps & Logs",
        description: "Ensure Windows is set to create minidumps (Control Panel → System → \
                      Advanced → Startup and Recovery). Logs make root-cause analysis \
                      possible.",
        highlight: "Analyze dumps with WinDbg or upload to an analyzer like WhoCrashed.",
    },
];

/// Diagnostic timeline, in execution order.
pub const TROUBLESHOOTING_STEPS: &[TroubleshootingStep] = &[
    TroubleshootingStep {
        title: "Run Startup Diagnostics",
        description: "Boot into Windows Recovery Environment (WinRE) and run built-in repair \
                      tools.",
        items: Some(&[
            "Use Advanced Options → Startup Repair to fix bootloader corruption.",
            "Open Command Prompt → `sfc /scannow` and `DISM /Online /Cleanup-Image \
             /RestoreHealth` for system file repairs.",
            "If the system fails to boot, use Safe Mode to isolate crashing startup drivers.",
        ]),
        next_actions: None,
    },
    TroubleshootingStep {
        title: "Stabilize Drivers & Firmware",
        description: "Out-of-date or faulty drivers are responsible for the majority of BSODs.",
        items: Some(&[
            "Update storage, chipset, GPU, and network drivers directly from OEM websites.",
            "Roll back problematic driver updates from Device Manager when BSODs started after \
             an update.",
            "Update BIOS/UEFI firmware to the latest stable release to resolve low-level \
             incompatibilities.",
        ]),
        next_actions: None,
    },
    TroubleshootingStep {
        title: "Stress Test Memory & Storage",
        description: "Hardware instability produces intermittent stop codes that appear random.",
        items: Some(&[
            "Run Windows Memory Diagnostic or MemTest86 overnight; replace RAM if errors appear.",
            "Use vendor SSD tools (Samsung Magician, Crucial Storage Executive) to check SMART \
             health.",
            "Test with `chkdsk /scan` and manufacturer diagnostics to catch failing drives.",
        ]),
        next_actions: None,
    },
    TroubleshootingStep {
        title: "Check Thermals & Power Delivery",
        description: "Thermal throttling or inadequate power rails cause BSODs under load.",
        items: Some(&[
            "Monitor temperatures with HWInfo64 or OpenHardwareMonitor while stressing CPU/GPU.",
            "Clean dust from heatsinks and ensure fans and pumps operate correctly.",
            "Verify PSU wattage headroom ≥ 20% of maximum draw; swap with a known-good PSU if in \
             doubt.",
        ]),
        next_actions: None,
    },
    TroubleshootingStep {
        title: "Use Reliability Monitor & Event Viewer",
        description: "Pinpoint patterns correlating crashes with specific drivers, services, or \
                      applications.",
        items: Some(&[
            "Reliability Monitor (search \"Reliability History\") offers a timeline of critical \
             events.",
            "Event Viewer → Windows Logs → System, filter for \"BugCheck\" and \"Kernel-Power\" \
             events.",
            "Double-click events for faulting modules and use the stop code to search Microsoft \
             KB articles.",
        ]),
        next_actions: None,
    },
    TroubleshootingStep {
        title: "Escalate or Refresh Windows",
        description: "When all else fails, isolate software from hardware or reinstall cleanly.",
        items: Some(&[
            "Perform an in-place upgrade install using the Windows 11/10 media creation tool to \
             repair system files without losing data.",
            "If BSODs persist on a fresh OS, suspect hardware: test components individually or \
             seek warranty service.",
            "Collect minidumps, system info (`msinfo32`), and driver list (`driverquery /v`) \
             before opening a vendor support ticket.",
        ]),
        next_actions: None,
    },
];

/// Habits that keep crashes from coming back.
pub const PROACTIVE_ACTIONS: &[&str] = &[
    "Enable automatic minidump creation (Small memory dump) and configure a dedicated dump \
     folder.",
    "Schedule weekly `sfc /scannow` and `DISM` health scans via Task Scheduler for \
     mission-critical machines.",
    "Keep OEM drivers synchronized using vendor update utilities (e.g., Dell Command Update, \
     Lenovo System Update).",
    "Document BIOS settings and keep a rollback plan before applying firmware updates.",
    "Back up system images with tools like Macrium Reflect before major Windows feature \
     updates.",
];

/// Further reading.
pub const RESOURCES: &[ResourceLink] = &[
    ResourceLink {
        title: "Microsoft BSOD Knowledge Base",
        description: "Official stop code documentation and remediation guidance curated by \
                      Microsoft Support.",
        href: "https://learn.microsoft.com/windows-hardware/drivers/debugger/bug-check-code-reference2",
    },
    ResourceLink {
        title: "WinDbg Preview + Crash Dump Analysis",
        description: "Step-by-step guide to install WinDbg, load symbols, and run `!analyze -v` \
                      against minidumps.",
        href: "https://learn.microsoft.com/windows-hardware/drivers/debugger/debugger-download-tools",
    },
    ResourceLink {
        title: "Windows Reliability Monitor Deep Dive",
        description: "Understand reliability metrics and how to correlate crash signatures with \
                      software changes.",
        href: "https://learn.microsoft.com/windows/win32/wmisdk/using-the-reliability-monitor",
    },
    ResourceLink {
        title: "Hardware Diagnostics Checklist",
        description: "Comprehensive workflow for memory, storage, GPU, and PSU validation before \
                      RMA replacement.",
        href: "https://www.intel.com/content/www/us/en/support/articles/000005597/processors.html",
    },
];

/// Most common crash signatures.
pub const STOP_CODES: &[StopCodeEntry] = &[
    StopCodeEntry {
        code: "CRITICAL_PROCESS_DIED (0xEF)",
        advice: "System process crashed unexpectedly. Run `sfc`, review startup drivers, and \
                 inspect minidumps for the faulting module.",
    },
    StopCodeEntry {
        code: "IRQL_NOT_LESS_OR_EQUAL (0xA)",
        advice: "Usually faulty drivers accessing invalid memory. Update \
                 chipset/network/storage drivers and review pool tags in WinDbg.",
    },
    StopCodeEntry {
        code: "WHEA_UNCORRECTABLE_ERROR (0x124)",
        advice: "Hardware error flagged by WHEA. Check CPU/GPU overclocks, thermals, and run \
                 manufacturer diagnostics.",
    },
    StopCodeEntry {
        code: "SYSTEM_SERVICE_EXCEPTION (0x3B)",
        advice: "Kernel-mode service threw an exception. Patch Windows, test third-party \
                 antivirus, and inspect recent driver installs.",
    },
    StopCodeEntry {
        code: "PAGE_FAULT_IN_NONPAGED_AREA (0x50)",
        advice: "Invalid memory access in nonpaged pool. Test RAM, inspect disk integrity, and \
                 verify driver memory usage with Driver Verifier.",
    },
];

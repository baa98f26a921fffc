//! Florida Medicaid topic texts (2024 figures)

/// Medicaid topics in match-priority order
pub fn medicaid_entries() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "eligibility",
            "Florida Medicaid Eligibility:\n\
             - Income limits vary by program and household size\n\
             - Aged/Disabled: Income limit ~$1,215/month for individuals (2024)\n\
             - Asset limits: $2,000 for individuals, $3,000 for couples (some programs)\n\
             - Must be U.S. citizen or qualified immigrant\n\
             - Must be Florida resident\n\
             - Must meet categorical requirements (aged 65+, disabled, or blind)\n\
             - Different rules apply for Long-Term Care Medicaid",
        ),
        (
            "application",
            "How to Apply for Florida Medicaid:\n\
             - Apply online: myflorida.com/accessflorida\n\
             - Apply by phone: 1-866-762-2237\n\
             - Apply in person: Local Department of Children and Families office\n\
             - Required documents: ID, proof of income, proof of assets, proof of residency\n\
             - Application processing: 30-45 days typically\n\
             - Can apply for multiple programs simultaneously",
        ),
        (
            "long term care",
            "Florida Medicaid Long-Term Care:\n\
             - Covers nursing home care for eligible individuals\n\
             - Income limit: $2,829/month (2024) for nursing home care\n\
             - Asset limit: $2,000 (individual), $3,000 (couple)\n\
             - Look-back period: 5 years for asset transfers\n\
             - Spousal impoverishment protections available\n\
             - Requires functional need assessment",
        ),
        (
            "nursing home",
            "Medicaid Nursing Home Coverage:\n\
             - Covers room, board, and medical care in Medicaid-certified facilities\n\
             - Must meet income and asset requirements\n\
             - Must require nursing home level of care\n\
             - Personal needs allowance: $130/month (2024)\n\
             - Spouse can keep income and assets under spousal impoverishment rules\n\
             - Estate recovery may apply after death",
        ),
        (
            "home care",
            "Medicaid Home and Community-Based Services:\n\
             - Waiver programs allow care at home instead of nursing home\n\
             - Programs: Aged and Disabled Adult (ADA) Waiver, Statewide Medicaid Managed Care\n\
             - Services may include: personal care, homemaker services, adult day care\n\
             - Must meet functional and financial eligibility\n\
             - Wait lists may exist for some waiver programs\n\
             - Contact local Aging and Disability Resource Center (ADRC)",
        ),
        (
            "income limits",
            "Florida Medicaid Income Limits (2024):\n\
             - Aged/Disabled (SSI-related): $1,215/month (individual)\n\
             - Long-Term Care: $2,829/month (nursing home)\n\
             - Home and Community-Based Services: Varies by program\n\
             - Income includes: Social Security, pensions, interest, dividends\n\
             - Some income may be excluded (e.g., Medicare premiums)\n\
             - Income limits increase annually",
        ),
        (
            "asset limits",
            "Florida Medicaid Asset Limits (2024):\n\
             - Standard: $2,000 (individual), $3,000 (couple)\n\
             - Exempt assets: Home (if living there or spouse), one vehicle, personal belongings\n\
             - Exempt assets: Prepaid funeral, certain life insurance\n\
             - Countable assets: Bank accounts, investments, second homes, additional vehicles\n\
             - 5-year look-back period for asset transfers\n\
             - Different rules for Long-Term Care vs. regular Medicaid",
        ),
        (
            "waiver programs",
            "Florida Medicaid Waiver Programs:\n\
             - Aged and Disabled Adult (ADA) Waiver: Home and community-based services\n\
             - Statewide Medicaid Managed Care Long-Term Care: Comprehensive managed care\n\
             - Program of All-Inclusive Care for the Elderly (PACE): Day center-based care\n\
             - Services vary by program and may include: personal care, respite, adult day care\n\
             - Must meet functional and financial eligibility\n\
             - Contact ADRC for assessment and enrollment",
        ),
        (
            "florida specific",
            "Florida Medicaid Resources:\n\
             - Apply: myflorida.com/accessflorida or 1-866-762-2237\n\
             - State Medicaid Agency: Agency for Health Care Administration (AHCA)\n\
             - Aging and Disability Resource Centers (ADRC): Local offices throughout Florida\n\
             - SHIP (State Health Insurance Assistance Program): 1-800-963-5337\n\
             - Florida Department of Elder Affairs: elderaffairs.org\n\
             - Over 4.5 million Floridians enrolled in Medicaid",
        ),
    ]
}
